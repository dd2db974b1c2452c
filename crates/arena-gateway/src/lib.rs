//! HTTP gateway exposing the fighter roster as a JSON API.
//!
//! Every response body is wrapped in a uniform envelope:
//! `{ "data": ..., "code": 0, "msg": "" }` on success and
//! `{ "code": <status>, "msg": <reason> }` on failure.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
