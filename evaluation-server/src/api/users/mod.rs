//! User API module
//!
//! Dashboard accounts: RH/admin manage chef and RH accounts, every user
//! manages their own profile.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use shared::models::Role;

use crate::auth::require_role;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // Own profile (admin may edit any)
    let profile_routes = Router::new().route(
        "/api/user/{matricule}",
        get(handler::get_profile).put(handler::update_profile),
    );

    let manage_routes = Router::new()
        .route("/api/chef", get(handler::list))
        .route("/adduser", post(handler::create))
        .route(
            "/api/chef/{matricule}",
            put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_role(Role::MANAGE)));

    profile_routes.merge(manage_routes)
}
