//! Compagnie (evaluation campaign) API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use shared::models::Role;

use crate::auth::require_role;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let read_routes = Router::new()
        .route("/api/compagnie/active", get(handler::is_active))
        .route("/api/compagnies/active", get(handler::get_active));

    let manage_routes = Router::new()
        .route("/api/compagnie", post(handler::create))
        .route("/api/compagnie/disable", put(handler::disable))
        .route("/api/compagnies", get(handler::list))
        .layer(middleware::from_fn(require_role(Role::MANAGE)));

    read_routes.merge(manage_routes)
}
