use crate::error::StorageError;
use crate::fighter::{Fighter, FighterEdit};
use crate::name::FighterName;
use async_trait::async_trait;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The storage collaborator behind a fighter repository.
///
/// Every mutating call is a single atomic step with respect to other calls
/// on the same name: implementations must not expose a half-applied change.
#[async_trait]
pub trait FighterStore: Send + Sync + 'static {
    /// Returns every stored fighter in insertion order.
    async fn list(&self) -> Result<Vec<Fighter>>;

    /// Retrieves the fighter with exactly this name.
    /// Returns `None` if no such fighter exists.
    async fn get(&self, name: &FighterName) -> Result<Option<Fighter>>;

    /// Inserts a new fighter. Returns `Err(Conflict)` if the name is taken.
    async fn insert(&self, fighter: Fighter) -> Result<()>;

    /// Applies `edit` to the named fighter via [`Fighter::apply_edit`] and
    /// returns the updated record, or `None` if the name is unknown.
    async fn modify(&self, name: &FighterName, edit: FighterEdit) -> Result<Option<Fighter>>;

    /// Removes the named fighter and returns its last state.
    /// Returns `None` if the name is unknown.
    async fn remove(&self, name: &FighterName) -> Result<Option<Fighter>>;
}
