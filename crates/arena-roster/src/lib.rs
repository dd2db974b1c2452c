//! The fighter roster: the repository that owns the authoritative set of
//! fighters.
//!
//! [`RosterService`] validates input against the naming pattern, allocates
//! identifiers and timestamps, and delegates persistence to any
//! [`FighterStore`](arena_core::FighterStore).

pub mod clock;
pub mod generator;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use generator::{seq::SeqGenerator, IdGenerator, UuidGenerator};
pub use service::RosterService;
