use crate::error::Result;
use crate::fighter::Fighter;
use async_trait::async_trait;

/// The authoritative set of fighters and its CRUD operations.
///
/// Inputs arrive as raw strings and are validated against the naming
/// pattern before anything is stored. A failed call leaves the record set
/// unchanged.
#[async_trait]
pub trait FighterRepository: Send + Sync + 'static {
    /// Returns all current fighters. Empty when there are none.
    async fn list(&self) -> Result<Vec<Fighter>>;

    /// Finds the fighter whose name exactly equals `name`.
    ///
    /// `name` must already be decoded from any transport encoding.
    /// Returns `Err(NotFound)` if no fighter matches.
    async fn find_by_name(&self, name: &str) -> Result<Fighter>;

    /// Creates a fighter.
    ///
    /// Fails with `Validation` if `name` or any skill breaks the naming
    /// pattern and with `Conflict` if the name is taken.
    async fn create(&self, name: &str, skills: Vec<String>) -> Result<Fighter>;

    /// Replaces the skills of an existing fighter and stamps `updated_at`.
    ///
    /// Fails with `Validation` on a bad skill and `NotFound` on an unknown name.
    async fn edit(&self, name: &str, skills: Vec<String>) -> Result<Fighter>;

    /// Deletes a fighter and returns its last known state.
    async fn delete(&self, name: &str) -> Result<Fighter>;
}
