use axum::{Json, extract::State};
use shared::models::Niveau;

use crate::api::ApiResult;
use crate::db;
use crate::state::AppState;

/// GET /Niveau - ordered by id
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Niveau>> {
    let niveaux = db::niveaux::list(&state.pool).await?;
    Ok(Json(niveaux))
}
