use crate::clock::{Clock, SystemClock};
use crate::generator::{IdGenerator, UuidGenerator};
use arena_core::error::Result;
use arena_core::fighter::parse_skills;
use arena_core::{
    Fighter, FighterDraft, FighterEdit, FighterError, FighterName, FighterRepository,
    FighterStore, ValidationError,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// The concrete fighter repository.
///
/// This service wraps a [`FighterStore`] and handles:
/// - Naming-pattern validation of names and skills
/// - Identifier allocation via an [`IdGenerator`]
/// - `created_at` / `updated_at` stamping via a [`Clock`]
///
/// Atomicity and name uniqueness under concurrent calls are delegated to
/// the store, whose mutating operations are single atomic steps.
#[derive(TypedBuilder)]
pub struct RosterService<S> {
    store: Arc<S>,
    #[builder(default = Arc::new(UuidGenerator) as Arc<dyn IdGenerator>)]
    generator: Arc<dyn IdGenerator>,
    #[builder(default = Arc::new(SystemClock) as Arc<dyn Clock>)]
    clock: Arc<dyn Clock>,
}

impl<S: FighterStore> RosterService<S> {
    /// Creates a service with random UUID ids and the system clock.
    pub fn new(store: S) -> Self {
        Self::builder().store(Arc::new(store)).build()
    }
}

/// Resolves a lookup key, failing with `NotFound` for names that break the
/// naming pattern since such a name can never have been stored.
fn lookup_key(name: &str) -> Result<FighterName> {
    FighterName::new(name).map_err(|_| FighterError::NotFound(name.to_string()))
}

impl<S> Clone for RosterService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<S: FighterStore> FighterRepository for RosterService<S> {
    async fn list(&self) -> Result<Vec<Fighter>> {
        trace!("listing fighters");
        Ok(self.store.list().await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Fighter> {
        trace!(name, "finding fighter");

        let key = lookup_key(name)?;
        self.store
            .get(&key)
            .await?
            .ok_or_else(|| FighterError::NotFound(name.to_string()))
    }

    async fn create(&self, name: &str, skills: Vec<String>) -> Result<Fighter> {
        let draft = FighterDraft::new(name, skills)?;
        let fighter = Fighter::new(self.generator.generate(), draft, self.clock.now());

        self.store.insert(fighter.clone()).await?;

        debug!(name = %fighter.name, id = %fighter.id, "created fighter");
        Ok(fighter)
    }

    async fn edit(&self, name: &str, skills: Vec<String>) -> Result<Fighter> {
        let skills = parse_skills(skills)?;
        if name.is_empty() {
            return Err(ValidationError::new("name", "must not be empty").into());
        }

        let key = lookup_key(name)?;
        let edit = FighterEdit::new(skills, self.clock.now());
        let fighter = self
            .store
            .modify(&key, edit)
            .await?
            .ok_or_else(|| FighterError::NotFound(name.to_string()))?;

        debug!(name = %fighter.name, "edited fighter");
        Ok(fighter)
    }

    async fn delete(&self, name: &str) -> Result<Fighter> {
        let key = lookup_key(name)?;
        let fighter = self
            .store
            .remove(&key)
            .await?
            .ok_or_else(|| FighterError::NotFound(name.to_string()))?;

        debug!(name = %fighter.name, "deleted fighter");
        Ok(fighter)
    }
}
