//! Data models
//!
//! Shared between the HTTP server and its tests.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Matricules are `String`, surrogate ids are `i64` (PostgreSQL BIGSERIAL).

pub mod compagnie;
pub mod employe;
pub mod evaluation;
pub mod niveau;
pub mod question;
pub mod reponse;
pub mod report;
pub mod serde_helpers;
pub mod user;

// Re-exports
pub use compagnie::*;
pub use employe::*;
pub use evaluation::*;
pub use niveau::*;
pub use question::*;
pub use reponse::*;
pub use report::*;
pub use user::*;
