use super::{Document, Entry, EntryKind, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub gpa: Option<Option<String>>,
}

impl Record for Education {
    type Patch = EducationPatch;
    const KIND: EntryKind = EntryKind::Education;

    fn merge(&mut self, patch: EducationPatch) {
        if let Some(v) = patch.institution {
            self.institution = v;
        }
        if let Some(v) = patch.degree {
            self.degree = v;
        }
        if let Some(v) = patch.field {
            self.field = v;
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
        if let Some(v) = patch.gpa {
            self.gpa = v;
        }
    }

    fn into_patch(self) -> EducationPatch {
        EducationPatch {
            institution: Some(self.institution),
            degree: Some(self.degree),
            field: Some(self.field),
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            location: Some(self.location),
            description: Some(self.description),
            gpa: Some(self.gpa),
        }
    }

    fn summary(&self) -> String {
        match (self.degree.is_empty(), self.institution.is_empty()) {
            (false, false) => format!("{} at {}", self.degree, self.institution),
            (true, false) => self.institution.clone(),
            _ => self.degree.clone(),
        }
    }

    fn entries(doc: &Document) -> &Vec<Entry<Self>> {
        &doc.education
    }

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
        &mut doc.education
    }
}
