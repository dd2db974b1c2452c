use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::LazyLock;

/// Starts with a CJK ideograph or ASCII letter; when longer than one
/// character, ends with an ideograph, letter or digit. Interior characters
/// may also be digits, spaces, hyphens or underscores.
static NAMING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Han}A-Za-z](?:[\p{Han}A-Za-z0-9 _-]*[\p{Han}A-Za-z0-9])?$")
        .expect("naming pattern is a valid regex")
});

/// Maximum number of characters in a fighter name.
pub const MAX_NAME_LENGTH: usize = 64;

/// Checks `value` against the naming pattern, reporting failures against `field`.
pub fn validate_pattern(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    if !NAMING_PATTERN.is_match(value) {
        return Err(ValidationError::new(
            field,
            format!(
                "'{value}' must start with a CJK ideograph or ASCII letter, end with an \
                 ideograph, letter or digit, and otherwise contain only digits, spaces, \
                 hyphens or underscores"
            ),
        ));
    }

    Ok(())
}

/// The unique key of a fighter.
///
/// Names are compared exactly and case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FighterName(String);

impl FighterName {
    /// Creates a `FighterName` after validating it against the naming pattern.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_pattern("name", &name)?;

        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::new(
                "name",
                format!("length must be at most {MAX_NAME_LENGTH}, got {length}"),
            ));
        }

        Ok(Self(name))
    }

    /// Creates a `FighterName` without validation.
    ///
    /// Use this only for names read back from trusted storage.
    pub fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FighterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FighterName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FighterName> for String {
    fn from(value: FighterName) -> Self {
        value.0
    }
}

/// A single skill of a fighter, validated with the same pattern as names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Skill(String);

impl Skill {
    pub fn new(skill: impl Into<String>) -> Result<Self, ValidationError> {
        Self::for_field("skill", skill)
    }

    /// Validates `skill`, reporting failures against `field` (e.g. `skill[3]`).
    pub(crate) fn for_field(
        field: &str,
        skill: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let skill = skill.into();
        validate_pattern(field, &skill)?;
        Ok(Self(skill))
    }

    /// Creates a `Skill` without validation.
    pub fn new_unchecked(skill: impl Into<String>) -> Self {
        Self(skill.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Skill {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Skill> for String {
    fn from(value: Skill) -> Self {
        value.0
    }
}
