use super::{Document, Entry, EntryKind, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Proficiency from 1 (beginner) to 5 (expert).
///
/// Out-of-range values cannot be represented: construction goes through
/// [`SkillLevel::new`] or `TryFrom`, and deserialization uses the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SkillLevel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("skill level must be between 1 and 5, got {0}")]
pub struct LevelOutOfRange(pub i64);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(SkillLevel(level))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Elementary",
            3 => "Intermediate",
            4 => "Advanced",
            _ => "Expert",
        }
    }

    /// Five-star meter, filled up to the level.
    pub fn stars(&self) -> String {
        let filled = self.0 as usize;
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(Self::MAX as usize - filled)
        )
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel(3)
    }
}

impl TryFrom<i64> for SkillLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(SkillLevel::new)
            .ok_or(LevelOutOfRange(value))
    }
}

impl From<SkillLevel> for i64 {
    fn from(level: SkillLevel) -> Self {
        level.0 as i64
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

impl Record for Skill {
    type Patch = SkillPatch;
    const KIND: EntryKind = EntryKind::Skill;

    fn merge(&mut self, patch: SkillPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.level {
            self.level = v;
        }
    }

    fn into_patch(self) -> SkillPatch {
        SkillPatch {
            name: Some(self.name),
            level: Some(self.level),
        }
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.level.label())
    }

    fn entries(doc: &Document) -> &Vec<Entry<Self>> {
        &doc.skills
    }

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
        &mut doc.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_accepts_one_through_five() {
        for n in 1..=5 {
            assert_eq!(SkillLevel::new(n).unwrap().get(), n);
        }
        assert!(SkillLevel::new(0).is_none());
        assert!(SkillLevel::new(6).is_none());
    }

    #[test]
    fn level_conversion_rejects_out_of_range() {
        assert_eq!(SkillLevel::try_from(9), Err(LevelOutOfRange(9)));
        assert_eq!(SkillLevel::try_from(-1), Err(LevelOutOfRange(-1)));
        assert_eq!(SkillLevel::try_from(300), Err(LevelOutOfRange(300)));
    }

    #[test]
    fn level_deserialization_rejects_out_of_range() {
        let bad: Result<Skill, _> = serde_json::from_str(r#"{"name": "Go", "level": 9}"#);
        assert!(bad.is_err());

        let good: Skill = serde_json::from_str(r#"{"name": "Go", "level": 5}"#).unwrap();
        assert_eq!(good.level.get(), 5);
    }

    #[test]
    fn labels_and_stars() {
        let level = SkillLevel::new(4).unwrap();
        assert_eq!(level.label(), "Advanced");
        assert_eq!(level.stars(), "★★★★☆");
        assert_eq!(SkillLevel::default().label(), "Intermediate");
    }
}
