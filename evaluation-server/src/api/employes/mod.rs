//! Employee API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};
use shared::models::Role;

use crate::auth::require_role;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // Chefs read their own employees (checked per request)
    let read_routes = Router::new()
        .route("/api/employe/{matricule}", get(handler::get_by_id))
        .route(
            "/api/employes/chef/{matricule_chef}",
            get(handler::pending_for_chef),
        );

    let manage_routes = Router::new()
        .route("/employe", get(handler::list))
        .route("/api/employe", axum::routing::post(handler::create))
        .route("/api/employe/update", put(handler::update))
        .route(
            "/api/employe/{matricule}",
            axum::routing::delete(handler::delete),
        )
        .layer(middleware::from_fn(require_role(Role::MANAGE)));

    read_routes.merge(manage_routes)
}
