//! # Template Renderers
//!
//! Rendering is a pure function of the document: [`Layout::project`] turns a
//! [`Document`] into display-ready values, and one of three minijinja templates
//! lays those values out as Markdown. The same layout feeds every template, so
//! switching templates never changes *what* is shown, only how.
//!
//! | Template  | Character                                             |
//! |-----------|-------------------------------------------------------|
//! | `modern`  | bold headings, inline contact line, skill chips       |
//! | `classic` | centered upper-case header, ruled upper-case sections |
//! | `minimal` | plain stacked header, small understated headings      |
//!
//! Templates are compiled into the binary and registered once per [`Renderer`].

use crate::error::Result;
use crate::format::code_span;
use crate::model::{Document, Template};
use minijinja::Environment;

mod layout;

pub use layout::{
    CertificateItem, EducationItem, ExperienceItem, Header, LanguageItem, Layout, Link,
    ProjectItem, SkillItem,
};

const MODERN: &str = include_str!("templates/modern.jinja");
const CLASSIC: &str = include_str!("templates/classic.jinja");
const MINIMAL: &str = include_str!("templates/minimal.jinja");

fn source(template: Template) -> &'static str {
    match template {
        Template::Modern => MODERN,
        Template::Classic => CLASSIC,
        Template::Minimal => MINIMAL,
    }
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("code", |text: String| code_span(&text));
        for template in Template::ALL {
            env.add_template(template.as_str(), source(template))?;
        }
        Ok(Self { env })
    }

    /// Renders with the document's selected template.
    pub fn render(&self, doc: &Document) -> Result<String> {
        self.render_with(doc, doc.template)
    }

    /// Renders with any template, leaving the document's selection alone.
    pub fn render_with(&self, doc: &Document, template: Template) -> Result<String> {
        let layout = Layout::project(doc);
        let tmpl = self.env.get_template(template.as_str())?;
        let output = tmpl.render(&layout)?;
        Ok(tidy(&output))
    }
}

/// Collapses runs of blank lines and ends the text with a single newline.
fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 || out.is_empty() {
                continue;
            }
            out.push('\n');
        } else {
            blank_run = 0;
            out.push_str(line);
            out.push('\n');
        }
    }
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}
