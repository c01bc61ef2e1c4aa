//! Export adapter: turns the rendered resume into a downloadable file.
//!
//! Exporters only read the document. Writing the bytes somewhere is left to the
//! caller (the CLI writes them next to the working directory by default).

use crate::error::{Result, VitaeError};
use crate::format::export_file_stem;
use crate::model::Document;
use crate::render::Renderer;
use pulldown_cmark::{html, Event, Options, Parser};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Md,
    #[default]
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Md => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn exporter(&self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Md => Box::new(MarkdownExporter),
            ExportFormat::Html => Box::new(HtmlExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Md),
            "html" | "htm" => Ok(ExportFormat::Html),
            other => Err(format!("Unknown export format '{}' (expected md or html)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub trait Exporter {
    fn format(&self) -> ExportFormat;

    fn export(&self, doc: &Document, renderer: &Renderer) -> Result<ExportedFile>;
}

fn ensure_exportable(doc: &Document) -> Result<()> {
    if doc.is_empty() {
        return Err(VitaeError::EmptyResume);
    }
    Ok(())
}

fn file_name(doc: &Document, format: ExportFormat) -> String {
    format!(
        "{}.{}",
        export_file_stem(&doc.personal_info.full_name),
        format.extension()
    )
}

pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Md
    }

    fn export(&self, doc: &Document, renderer: &Renderer) -> Result<ExportedFile> {
        ensure_exportable(doc)?;
        let markdown = renderer.render(doc)?;
        let file_name = file_name(doc, self.format());
        debug!(file = %file_name, bytes = markdown.len(), "exported markdown");
        Ok(ExportedFile {
            file_name,
            bytes: markdown.into_bytes(),
        })
    }
}

/// Standalone, printable HTML page.
pub struct HtmlExporter;

const STYLESHEET: &str = "body{font-family:Helvetica,Arial,sans-serif;max-width:50rem;\
margin:2rem auto;padding:0 1.5rem;line-height:1.45;color:#1f2937}\
h1{margin-bottom:.25rem}h2{border-bottom:2px solid #d1d5db;padding-bottom:.2rem}\
code{background:#f3f4f6;border-radius:9999px;padding:.1rem .6rem;font-family:inherit}\
@media print{body{margin:0}}";

impl Exporter for HtmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn export(&self, doc: &Document, renderer: &Renderer) -> Result<ExportedFile> {
        ensure_exportable(doc)?;
        let markdown = renderer.render(doc)?;

        let body = markdown_to_html(&markdown);

        let title = escape(&format!("{} - Resume", doc.personal_info.full_name.trim()));
        let page = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body class=\"template-{}\">\n{}</body>\n</html>\n",
            title, STYLESHEET, doc.template, body
        );

        let file_name = file_name(doc, self.format());
        debug!(file = %file_name, bytes = page.len(), "exported html");
        Ok(ExportedFile {
            file_name,
            bytes: page.into_bytes(),
        })
    }
}

/// Raw HTML in the Markdown is shown as text, never passed through.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut body = String::new();
    html::push_html(&mut body, parser);
    body
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;

    fn doc() -> Document {
        let mut doc = Document::default();
        doc.personal_info.full_name = "Jane  Q Doe".into();
        doc.personal_info.summary = "Ships fast & safe code.".into();
        doc.template = Template::Classic;
        doc
    }

    #[test]
    fn empty_resume_is_refused() {
        let renderer = Renderer::new().unwrap();
        for format in [ExportFormat::Md, ExportFormat::Html] {
            let err = format
                .exporter()
                .export(&Document::default(), &renderer)
                .unwrap_err();
            assert!(matches!(err, VitaeError::EmptyResume));
        }
    }

    #[test]
    fn markdown_export_matches_preview() {
        let renderer = Renderer::new().unwrap();
        let d = doc();
        let file = MarkdownExporter.export(&d, &renderer).unwrap();
        assert_eq!(file.file_name, "Jane_Q_Doe_Resume.md");
        assert_eq!(String::from_utf8(file.bytes).unwrap(), renderer.render(&d).unwrap());
    }

    #[test]
    fn html_export_is_a_standalone_page() {
        let renderer = Renderer::new().unwrap();
        let file = HtmlExporter.export(&doc(), &renderer).unwrap();
        assert_eq!(file.file_name, "Jane_Q_Doe_Resume.html");

        let page = String::from_utf8(file.bytes).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Jane  Q Doe - Resume</title>"));
        assert!(page.contains("template-classic"));
        assert!(page.contains("<h2>PROFESSIONAL SUMMARY</h2>"));
        assert!(page.contains("fast &amp; safe"));
    }

    #[test]
    fn markup_in_user_text_stays_text() {
        let renderer = Renderer::new().unwrap();
        let mut d = doc();
        d.personal_info.summary = "# Hired\n1. <script>alert(1)</script> *now*".into();

        let page = String::from_utf8(HtmlExporter.export(&d, &renderer).unwrap().bytes).unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<h1>Hired</h1>"));
        assert!(!page.contains("<ol>"));
        assert!(!page.contains("<em>now</em>"));
        assert!(page.contains("# Hired"));
    }

    #[test]
    fn raw_html_in_markdown_is_not_passed_through() {
        let body = markdown_to_html("<div onclick=x>block</div>\n\nSee <b>this</b>.\n");
        assert!(!body.contains("<div"));
        assert!(!body.contains("<b>"));
        assert!(body.contains("&lt;div onclick=x&gt;"));
        assert!(body.contains("&lt;b&gt;this&lt;/b&gt;"));
    }

    #[test]
    fn format_parsing() {
        assert_eq!("MD".parse::<ExportFormat>().unwrap(), ExportFormat::Md);
        assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Md);
        assert_eq!("html".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
