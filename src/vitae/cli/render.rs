//! # Terminal Output
//!
//! Command results become terminal text through small minijinja templates in
//! `cli/templates/`. Templates pick styles by name through the `style` filter;
//! the names resolve against [`VITAE_THEME`].
//!
//! Width math (padding, truncation) happens here in Rust and is done on the
//! unstyled text, so ANSI codes never skew alignment.

use super::styles::{names, VITAE_THEME};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vitae::api::{CmdMessage, ListedEntry, MessageLevel};

const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
const PAIRS_TEMPLATE: &str = include_str!("templates/pairs.jinja");

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct RowData {
    position: String,
    summary: String,
    padding: String,
    id: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowData>,
    empty_message: String,
}

#[derive(Serialize)]
struct PairData {
    key: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct PairsData {
    heading: Option<String>,
    pairs: Vec<PairData>,
}

fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn environment(use_color: bool) -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        VITAE_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("messages", MESSAGES_TEMPLATE)?;
    env.add_template("list", LIST_TEMPLATE)?;
    env.add_template("pairs", PAIRS_TEMPLATE)?;
    Ok(env)
}

fn render<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String, Error> {
    environment(use_color)?.get_template(name)?.render(data)
}

fn style_for(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn render_messages_with(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: style_for(m.level),
            })
            .collect(),
    };

    render("messages", &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages_with(messages, use_color());
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn render_entries_with(
    entries: &[ListedEntry],
    width: usize,
    empty_message: &str,
    use_color: bool,
) -> String {
    let rows = entries
        .iter()
        .map(|entry| {
            let position = format!("{:>3}.", entry.position);
            let id = entry.id.to_string();
            // position, one space, summary, two spaces, id
            let fixed = position.width() + 1 + 2 + id.width();
            let available = width.saturating_sub(fixed);
            let summary = truncate_to_width(&entry.summary, available);
            let padding = " ".repeat(available.saturating_sub(summary.width()));
            RowData {
                position,
                summary,
                padding,
                id,
            }
        })
        .collect();

    let data = ListData {
        rows,
        empty_message: empty_message.to_string(),
    };
    render("list", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Prints an entry listing, one line per entry, fitted to `width` columns.
pub fn print_entries(entries: &[ListedEntry], width: usize, empty_message: &str) {
    print!(
        "{}",
        render_entries_with(entries, width, empty_message, use_color())
    );
}

fn render_pairs_with(heading: Option<&str>, pairs: &[(String, String)], use_color: bool) -> String {
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = PairsData {
        heading: heading.map(str::to_string),
        pairs: pairs
            .iter()
            .map(|(key, value)| PairData {
                key: key.clone(),
                padding: " ".repeat(key_width - key.width()),
                value: value.clone(),
            })
            .collect(),
    };
    render("pairs", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Prints aligned `key  value` lines under an optional heading.
pub fn print_pairs(heading: Option<&str>, pairs: &[(String, String)]) {
    print!("{}", render_pairs_with(heading, pairs, use_color()));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
