pub mod memory;
pub mod mysql;

pub use arena_core::{FighterStore, StorageError};
pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
