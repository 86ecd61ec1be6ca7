//! Shared types for the evaluation service
//!
//! Domain models, the unified error system and the small pure helpers
//! (score totals, per-rubrique statistics) used by the HTTP server and its
//! tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
