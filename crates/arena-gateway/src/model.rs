mod envelope;
mod fighter;

pub use envelope::{ApiResponse, HealthResponse};
pub use fighter::{FighterPayload, FighterResponse};
