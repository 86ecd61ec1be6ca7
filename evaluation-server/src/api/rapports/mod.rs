//! Answer details and report data
//!
//! Feeds the exported evaluation report: every answered question and the
//! per-rubrique comparison of chef and RH notes.

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reponses/{evaluation_id}", get(handler::reponses))
        .route("/api/rapports/{evaluation_id}", get(handler::rapport))
}
