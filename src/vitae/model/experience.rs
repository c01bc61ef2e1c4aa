use super::{Document, Entry, EntryKind, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
    pub highlights: Vec<String>,
    /// Still in this role; the end date is ignored for display.
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub current: Option<bool>,
}

impl Record for Experience {
    type Patch = ExperiencePatch;
    const KIND: EntryKind = EntryKind::Experience;

    fn merge(&mut self, patch: ExperiencePatch) {
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.highlights {
            self.highlights = v;
        }
        if let Some(v) = patch.current {
            self.current = v;
        }
    }

    fn into_patch(self) -> ExperiencePatch {
        ExperiencePatch {
            company: Some(self.company),
            position: Some(self.position),
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            location: Some(self.location),
            description: Some(self.description),
            highlights: Some(self.highlights),
            current: Some(self.current),
        }
    }

    fn summary(&self) -> String {
        match (self.position.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{} at {}", self.position, self.company),
            (true, false) => self.company.clone(),
            _ => self.position.clone(),
        }
    }

    fn entries(doc: &Document) -> &Vec<Entry<Self>> {
        &doc.experience
    }

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
        &mut doc.experience
    }
}
