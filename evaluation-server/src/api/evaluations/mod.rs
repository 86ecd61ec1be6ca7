//! Evaluation workflow API module
//!
//! Chefs submit answers (`notechef`) for their employees; RH then revises
//! them (`noterh`) and validates the evaluation.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use shared::models::Role;

use crate::auth::require_role;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let chef_routes = Router::new()
        .route("/api/reponses_non_terminees", get(handler::in_progress_answers))
        .route("/api/evaluation_answers", post(handler::submit))
        .route("/api/evaluations/terminer", get(handler::list_completed))
        .route(
            "/api/evaluations/{matricule}/questions",
            get(handler::questions),
        )
        .route("/api/evaluationsemp/{matricule}", get(handler::history));

    let rh_routes = Router::new()
        .route("/api/evaluations/{matricule}/update", put(handler::revise))
        .route("/api/evaluations/{matricule}/valider", post(handler::validate))
        .route("/api/evaluations/validated", get(handler::list_to_validate))
        .layer(middleware::from_fn(require_role(Role::MANAGE)));

    chef_routes.merge(rh_routes)
}
