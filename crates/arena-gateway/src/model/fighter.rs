use arena_core::Fighter;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Request body of `POST /fighter` and `PUT /fighter`.
///
/// Missing fields default to empty so that they fail validation with a
/// field-specific message instead of a generic decoding error.
#[derive(Debug, Clone, Deserialize)]
pub struct FighterPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skill: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterResponse {
    pub id: String,
    pub name: String,
    pub skill: Vec<String>,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl From<Fighter> for FighterResponse {
    fn from(fighter: Fighter) -> Self {
        Self {
            id: fighter.id.to_string(),
            name: fighter.name.into(),
            skill: fighter.skills.into_iter().map(String::from).collect(),
            created_at: fighter.created_at,
            updated_at: fighter.updated_at,
        }
    }
}
