//! Certificates and languages.
//!
//! Both collections are part of the saved document and get the same store
//! contracts as every other record, but no form drives them yet.

use super::{Document, Entry, EntryKind, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<Option<String>>,
}

impl Record for Certificate {
    type Patch = CertificatePatch;
    const KIND: EntryKind = EntryKind::Certificate;

    fn merge(&mut self, patch: CertificatePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.issuer {
            self.issuer = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.url {
            self.url = v;
        }
    }

    fn into_patch(self) -> CertificatePatch {
        CertificatePatch {
            name: Some(self.name),
            issuer: Some(self.issuer),
            date: Some(self.date),
            url: Some(self.url),
        }
    }

    fn summary(&self) -> String {
        if self.issuer.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.issuer)
        }
    }

    fn entries(doc: &Document) -> &Vec<Entry<Self>> {
        &doc.certificates
    }

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
        &mut doc.certificates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Proficiency {
    Elementary,
    #[serde(rename = "Limited Working")]
    LimitedWorking,
    #[default]
    #[serde(rename = "Professional Working")]
    ProfessionalWorking,
    #[serde(rename = "Full Professional")]
    FullProfessional,
    Native,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Elementary => "Elementary",
            Proficiency::LimitedWorking => "Limited Working",
            Proficiency::ProfessionalWorking => "Professional Working",
            Proficiency::FullProfessional => "Full Professional",
            Proficiency::Native => "Native",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "elementary" => Ok(Proficiency::Elementary),
            "limitedworking" => Ok(Proficiency::LimitedWorking),
            "professionalworking" => Ok(Proficiency::ProfessionalWorking),
            "fullprofessional" => Ok(Proficiency::FullProfessional),
            "native" => Ok(Proficiency::Native),
            _ => Err(format!("Unknown proficiency '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub proficiency: Option<Proficiency>,
}

impl Record for Language {
    type Patch = LanguagePatch;
    const KIND: EntryKind = EntryKind::Language;

    fn merge(&mut self, patch: LanguagePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.proficiency {
            self.proficiency = v;
        }
    }

    fn into_patch(self) -> LanguagePatch {
        LanguagePatch {
            name: Some(self.name),
            proficiency: Some(self.proficiency),
        }
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.proficiency)
    }

    fn entries(doc: &Document) -> &Vec<Entry<Self>> {
        &doc.languages
    }

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
        &mut doc.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_uses_spaced_names_on_disk() {
        let lang = Language {
            name: "French".into(),
            proficiency: Proficiency::FullProfessional,
        };
        let json = serde_json::to_value(&lang).unwrap();
        assert_eq!(json["proficiency"], "Full Professional");
    }

    #[test]
    fn proficiency_parses_loose_spelling() {
        assert_eq!(
            "limited-working".parse::<Proficiency>().unwrap(),
            Proficiency::LimitedWorking
        );
        assert_eq!("Native".parse::<Proficiency>().unwrap(), Proficiency::Native);
        assert!("fluent".parse::<Proficiency>().is_err());
    }
}
