//! Display formatting shared by the renderers, the exporters and the CLI.
//!
//! All helpers are total: input they cannot make sense of comes back unchanged.

use chrono::NaiveDate;

/// Parses `YYYY-MM-DD` or `YYYY-MM` (taken as the first of the month).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
        .ok()
}

/// "2018-09-01" -> "September 2018". Empty stays empty.
pub fn format_date(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    match parse_date(s) {
        Some(date) => date.format("%B %Y").to_string(),
        None => s.to_string(),
    }
}

/// "<start> - <end>", or "<start> - Present" for an ongoing entry.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_date(start);
    if current {
        return format!("{} - Present", start);
    }
    format!("{} - {}", start, format_date(end))
}

/// Ten digits become `(XXX) XXX-XXXX`; anything else is returned as given.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return phone.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with something on both sides.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// File stem for an exported resume: "Jane Doe" -> "Jane_Doe_Resume".
pub fn export_file_stem(full_name: &str) -> String {
    let name = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{}_Resume", name)
    }
}

const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '|', '~'];

/// Backslash-escapes user text so Markdown shows it literally: no emphasis,
/// links, raw HTML, headings or list markers.
pub fn escape_markdown(s: &str) -> String {
    s.split('\n')
        .map(escape_markdown_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_markdown_line(line: &str) -> String {
    let body = line.trim_start();
    let mut out = String::with_capacity(line.len() + 4);
    out.push_str(&line[..line.len() - body.len()]);

    let digits = body.chars().take_while(char::is_ascii_digit).count();
    for (i, c) in body.chars().enumerate() {
        let opens_block = (i == 0 && matches!(c, '#' | '-' | '+' | '='))
            || (digits > 0 && i == digits && matches!(c, '.' | ')'));
        if opens_block || MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wraps [`escape_markdown`] output in a code span. Backslash escapes mean
/// nothing inside code, so they are undone and the fence is made longer than
/// any backtick run in the text.
pub fn code_span(escaped: &str) -> String {
    let mut text = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next_if(char::is_ascii_punctuation) {
                text.push(next);
                continue;
            }
        }
        text.push(c);
    }

    let longest = text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    let pad = if text.starts_with('`') || text.ends_with('`') { " " } else { "" };
    format!("{fence}{pad}{text}{pad}{fence}")
}

/// Percent-encodes the characters that would end a Markdown link target or
/// open markup around it. Everything else is left as typed.
pub fn link_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            ' ' | '"' | '<' | '>' | '(' | ')' | '[' | ']' | '`' | '\\' | '*' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}
