//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message and details
//! - [`ApiResponse`]: JSON body rendered for errors
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Campaign errors
//! - 4xxx: Evaluation errors
//! - 5xxx: Question bank errors
//! - 8xxx: Employee and user errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::NoActiveCompagnie);
//! let err = AppError::required_fields("Champs manquants", &["matricule"])
//!     .with_detail("hint", "matricule numérique");
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, 7);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError};
