use crate::error::ValidationError;
use crate::name::{FighterName, Skill};
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque, immutable identifier assigned when a fighter is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FighterId(String);

impl FighterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FighterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored fighter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: FighterId,
    pub name: FighterName,
    pub skills: Vec<Skill>,
    pub created_at: Timestamp,
    /// Set on every successful edit; `None` until the first one.
    pub updated_at: Option<Timestamp>,
}

impl Fighter {
    /// Builds a never-edited fighter from a validated draft.
    pub fn new(id: FighterId, draft: FighterDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            skills: draft.skills,
            created_at,
            updated_at: None,
        }
    }

    /// Replaces the skills and stamps `updated_at`.
    ///
    /// The stamp is never earlier than `edit.at` and always strictly after
    /// both `created_at` and any previous `updated_at`, so a coarse or
    /// skewed clock cannot produce `updated_at <= created_at`.
    pub fn apply_edit(&mut self, edit: FighterEdit) {
        let last = self.updated_at.unwrap_or(self.created_at).max(self.created_at);
        let floor = last + SignedDuration::from_nanos(1);

        self.skills = edit.skills;
        self.updated_at = Some(edit.at.max(floor));
    }
}

/// Validates each raw skill, naming the first offender as `skill[i]`.
pub fn parse_skills<I, S>(skills: I) -> Result<Vec<Skill>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    skills
        .into_iter()
        .enumerate()
        .map(|(index, skill)| Skill::for_field(&format!("skill[{index}]"), skill))
        .collect()
}

/// Validated input for creating a fighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FighterDraft {
    pub name: FighterName,
    pub skills: Vec<Skill>,
}

impl FighterDraft {
    /// Validates `name` and every entry of `skills` against the naming pattern.
    pub fn new<I, S>(name: impl Into<String>, skills: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = FighterName::new(name)?;
        let skills = parse_skills(skills)?;
        Ok(Self { name, skills })
    }
}

/// A validated skill replacement, stamped with the instant of the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FighterEdit {
    pub skills: Vec<Skill>,
    pub at: Timestamp,
}

impl FighterEdit {
    pub fn new(skills: Vec<Skill>, at: Timestamp) -> Self {
        Self { skills, at }
    }
}
