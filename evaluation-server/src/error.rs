//! Service-layer error type
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`, `BoxError`) and the
//! API-layer error (`AppError`), so handlers can use `?` on both.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error
///
/// - `Db`: database/infrastructure errors (logged, mapped to InternalError)
/// - `App`: business-rule errors (passed through to the client)
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Handler result: JSON body or error response
pub type ApiResult<T> = Result<axum::Json<T>, ServiceError>;

/// PostgreSQL unique_violation (23505)
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// PostgreSQL foreign_key_violation (23503)
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

/// Map a unique violation to `conflict`, anything else to a DB error
pub fn map_unique(err: sqlx::Error, conflict: ErrorCode) -> ServiceError {
    if is_unique_violation(&err) {
        ServiceError::App(AppError::new(conflict))
    } else {
        err.into()
    }
}

/// Map a foreign-key violation to `app`, anything else to a DB error
pub fn map_foreign_key(err: sqlx::Error, app: AppError) -> ServiceError {
    if is_foreign_key_violation(&err) {
        ServiceError::App(app)
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_db_error_becomes_internal() {
        let err: ServiceError = sqlx::Error::PoolTimedOut.into();
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_passes_through() {
        let err: ServiceError = AppError::new(ErrorCode::NoActiveCompagnie).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_map_unique_ignores_other_errors() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
        match map_unique(sqlx::Error::RowNotFound, ErrorCode::UserExists) {
            ServiceError::Db(_) => {}
            ServiceError::App(e) => panic!("unexpected app error {e}"),
        }
    }
}
