//! Core types and traits for the Arena fighter service.
//!
//! This crate provides the domain model shared by the storage backends,
//! the roster service and the HTTP gateway.

pub mod error;
pub mod fighter;
pub mod name;
pub mod repository;
pub mod store;

pub use error::{FighterError, StorageError, ValidationError};
pub use fighter::{Fighter, FighterDraft, FighterEdit, FighterId};
pub use name::{FighterName, Skill};
pub use repository::FighterRepository;
pub use store::FighterStore;
