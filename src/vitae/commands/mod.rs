use crate::config::VitaeConfig;
use crate::error::VitaeError;
use crate::export::ExportedFile;
use crate::id::Id;
use crate::model::{PersonalInfo, Template};
use std::fmt;
use std::str::FromStr;

pub mod config;
pub mod entries;
pub mod export;
pub mod helpers;
pub mod personal;
pub mod preview;
pub mod session;
pub mod template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of an entry listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// 1-based position, usable as a selector.
    pub position: usize,
    pub id: Id,
    pub summary: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedEntry>,
    pub affected: Option<Id>,
    pub personal: Option<PersonalInfo>,
    pub template: Option<Template>,
    pub rendered: Option<String>,
    pub exported: Option<ExportedFile>,
    pub config: Option<VitaeConfig>,
    pub messages: Vec<CmdMessage>,
    /// Input was refused (validation, unknown names, empty export). Nothing changed.
    pub rejected: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.rejected = true;
        self.messages.push(CmdMessage::error(message));
    }

    pub fn with_listed(mut self, listed: Vec<ListedEntry>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_config(mut self, config: VitaeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }

    /// Turns a failed write into the "this session only" notification. Any other
    /// error is handed back to the caller.
    pub(crate) fn absorb_persist_error(&mut self, err: VitaeError) -> crate::error::Result<()> {
        if err.is_persist() {
            self.add_message(CmdMessage::error(format!(
                "{}; changes are visible this session only",
                err
            )));
            Ok(())
        } else {
            Err(err)
        }
    }
}

/// Picks an entry either by 1-based position in its listing or by exact id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Id(Id),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Positions start at 1".to_string()),
            Ok(n) => Ok(Selector::Position(n)),
            Err(_) => Ok(Selector::Id(Id::from(s))),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "#{}", n),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A single edit requested for an entry draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryChange {
    /// Set a scalar field.
    Set(String, String),
    /// Append an item to a list field.
    Push(String, String),
    /// Remove the item at a 1-based position from a list field.
    Drop(String, usize),
}
