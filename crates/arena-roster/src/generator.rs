pub mod seq;

use arena_core::FighterId;
use uuid::Uuid;

/// Trait for allocating fighter identifiers.
///
/// Implementations are pure generators that don't interact with storage,
/// and every generated id must be unique.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> FighterId;
}

/// Generates random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> FighterId {
        FighterId::new(Uuid::new_v4().to_string())
    }
}
