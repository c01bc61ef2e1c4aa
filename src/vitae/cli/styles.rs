use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const POSITION: &str = "position";
    pub const ID: &str = "id";
    pub const LABEL: &str = "label";
    pub const HEADING: &str = "heading";
}

/// Named styles looked up by the `style` template filter.
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies a named style. Unknown names and plain mode return the text as is.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static VITAE_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::POSITION, Style::new().yellow())
        .add(names::ID, Style::new().color256(245).italic())
        .add(names::LABEL, Style::new().bold())
        .add(names::HEADING, Style::new().cyan().bold())
});
