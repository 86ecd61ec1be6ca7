//! Authentication and authorization
//!
//! - [`JwtService`] - token issue/validation
//! - [`CurrentUser`] - authenticated user context
//! - [`require_auth`] - authentication middleware
//! - [`require_role`] - role check middleware
//! - [`RateLimiter`] - per-IP login throttling

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod rate_limit;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_role};
pub use rate_limit::{RateLimiter, login_rate_limit};
