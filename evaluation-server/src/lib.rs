//! Evaluation Server - HR employee evaluation backend
//!
//! JSON API behind the evaluation dashboard: accounts and roles, employees,
//! evaluation campaigns (compagnies), the question bank and the chef → RH
//! evaluation workflow.
//!
//! # Module structure
//!
//! ```text
//! evaluation-server/src/
//! ├── api/       # HTTP routes and handlers, one module per resource
//! ├── auth/      # JWT, auth/role middleware, login rate limiting
//! ├── db/        # SQL access, one module per table
//! ├── config.rs  # environment configuration
//! ├── error.rs   # service-layer error
//! ├── state.rs   # shared application state
//! └── util.rs    # password hashing
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod util;

pub use api::create_router;
pub use auth::{CurrentUser, JwtService};
pub use config::Config;
pub use state::AppState;

// Security logging macro - accepts tracing field syntax (`%`, `?`)
#[macro_export]
macro_rules! security_log {
    ($level:ident, $event:expr, $($fields:tt)+) => {
        tracing::event!(
            target: "security",
            tracing::Level::$level,
            event = $event,
            $($fields)+
        )
    };
}
