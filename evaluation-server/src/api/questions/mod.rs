//! Question bank API module
//!
//! Fiches are groups of questions sharing a `codefiche`; fiche `11` holds
//! the per-employee custom questions added by chefs during an evaluation.

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use shared::models::Role;

use crate::auth::require_role;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let read_routes = Router::new()
        .route("/api/questions", get(handler::list_by_fiche))
        .route("/api/rubriques", get(handler::rubriques))
        .route("/api/questions_personnalisees", get(handler::list_custom))
        .route("/api/question_personnalisee", post(handler::create_custom));

    let manage_routes = Router::new()
        .route("/api/questions", post(handler::create))
        .route("/api/lesquestions", get(handler::list_all))
        .route("/Ajouter", post(handler::create_legacy))
        .route(
            "/api/questions/{id}",
            put(handler::update).delete(handler::delete),
        )
        .route("/api/questions/fiche/{codefiche}", delete(handler::delete_fiche))
        .route("/api/dupliquer-fiche", post(handler::duplicate_fiche))
        .layer(middleware::from_fn(require_role(Role::MANAGE)));

    read_routes.merge(manage_routes)
}
