use super::{Document, Entry, EntryKind, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub url: Option<Option<String>>,
    pub technologies: Option<Vec<String>>,
}

impl Record for Project {
    type Patch = ProjectPatch;
    const KIND: EntryKind = EntryKind::Project;

    fn merge(&mut self, patch: ProjectPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.url {
            self.url = v;
        }
        if let Some(v) = patch.technologies {
            self.technologies = v;
        }
    }

    fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            name: Some(self.name),
            description: Some(self.description),
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            url: Some(self.url),
            technologies: Some(self.technologies),
        }
    }

    fn summary(&self) -> String {
        if self.technologies.is_empty() {
            self.name.clone()
        } else {
            format!("{} [{}]", self.name, self.technologies.join(", "))
        }
    }

    fn entries(doc: &Document) -> &Vec<Entry<Self>> {
        &doc.projects
    }

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
        &mut doc.projects
    }
}
