//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role checks.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::{AppError, ErrorCode};
use shared::models::Role;

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::security_log;
use crate::state::AppState;

/// Authentication middleware - requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>` and
/// inserts [`CurrentUser`] into the request extensions.
///
/// | Failure | Status |
/// |---------|--------|
/// | missing header | 401 NotAuthenticated |
/// | expired token | 401 TokenExpired |
/// | invalid token | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!(WARN, "auth_missing", uri = %req.uri());
            return Err(AppError::not_authenticated());
        }
    };

    let claims = state.jwt.validate_token(token).map_err(|e| {
        security_log!(WARN, "auth_failed", error = %e, uri = %req.uri());
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    let user = CurrentUser::try_from(claims).map_err(|e| {
        security_log!(WARN, "auth_failed", error = %e);
        AppError::invalid_token("Invalid token")
    })?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Role check middleware - requires one of `roles`
///
/// Must run after [`require_auth`].
///
/// ```ignore
/// Router::new()
///     .route("/api/chef", get(users::list))
///     .route_layer(middleware::from_fn(require_role(Role::MANAGE)));
/// ```
pub fn require_role(
    roles: &'static [Role],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(AppError::not_authenticated)?;

            if !roles.contains(&user.role) {
                security_log!(
                    WARN,
                    "role_denied",
                    matricule = %user.matricule,
                    role = %user.role,
                    uri = %req.uri()
                );
                return Err(AppError::new(ErrorCode::RoleRequired));
            }

            Ok(next.run(req).await)
        })
    }
}
