//! Niveau (proficiency level) API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/Niveau", get(handler::list))
}
