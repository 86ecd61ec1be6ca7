//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login
//! - [`users`] - dashboard accounts and profiles
//! - [`employes`] - employees
//! - [`compagnies`] - evaluation campaigns
//! - [`niveaux`] - proficiency levels
//! - [`questions`] - question bank and custom questions
//! - [`evaluations`] - chef answers, RH revision and validation
//! - [`rapports`] - answer details and report data
//!
//! Every route except `/health` and `/login` sits behind [`require_auth`];
//! each resource module puts its admin/RH routes behind [`require_role`].
//!
//! [`require_auth`]: crate::auth::require_auth
//! [`require_role`]: crate::auth::require_role

pub mod access;
pub mod auth;
pub mod compagnies;
pub mod employes;
pub mod evaluations;
pub mod health;
pub mod niveaux;
pub mod questions;
pub mod rapports;
pub mod users;

use std::time::Duration;

use axum::http::{HeaderName, Method, header};
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::auth::{login_rate_limit, require_auth};
use crate::state::AppState;

pub use crate::error::ApiResult;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/login",
            post(auth::login).route_layer(middleware::from_fn_with_state(
                state.clone(),
                login_rate_limit,
            )),
        );

    let protected = Router::new()
        .merge(users::router())
        .merge(employes::router())
        .merge(compagnies::router())
        .merge(niveaux::router())
        .merge(questions::router())
        .merge(evaluations::router())
        .merge(rapports::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
}
