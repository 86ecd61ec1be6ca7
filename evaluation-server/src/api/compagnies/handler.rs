//! Compagnie API Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{Compagnie, CompagnieActive, CompagnieCreate};

use crate::api::ApiResult;
use crate::db;
use crate::db::compagnies::CreateOutcome;
use crate::error::ServiceError;
use crate::state::AppState;

/// POST /api/compagnie - open a campaign; only one may be active
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CompagnieCreate>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let date_debut = payload
        .date_debut
        .ok_or_else(|| AppError::new(ErrorCode::CompagnieDateRequired))?;

    match db::compagnies::create_exclusive(&state.pool, date_debut).await? {
        CreateOutcome::Created(compagnie) => {
            tracing::info!(id = compagnie.id, date_debut = %compagnie.date_debut, "Compagnie opened");
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "message": "Compagnie enregistrée avec succès.",
                    "compagnie": compagnie,
                })),
            ))
        }
        CreateOutcome::ActiveExists => Err(AppError::new(ErrorCode::ActiveCompagnieExists).into()),
    }
}

/// PUT /api/compagnie/disable - idempotent, `disabled` is 0 when none was active
pub async fn disable(State(state): State<AppState>) -> ApiResult<Value> {
    let disabled = db::compagnies::disable_active(&state.pool).await?;
    tracing::info!(disabled, "Active compagnie disabled");
    Ok(Json(json!({
        "message": "Compagnie désactivée avec succès.",
        "disabled": disabled,
    })))
}

/// GET /api/compagnie/active - `{active}` flag
pub async fn is_active(State(state): State<AppState>) -> ApiResult<CompagnieActive> {
    let active = db::compagnies::active_id(&state.pool).await?.is_some();
    Ok(Json(CompagnieActive { active }))
}

/// GET /api/compagnies/active - the active row, or 204
pub async fn get_active(State(state): State<AppState>) -> Result<Response, ServiceError> {
    Ok(match db::compagnies::find_active(&state.pool).await? {
        Some(compagnie) => Json(compagnie).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /api/compagnies - newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Compagnie>> {
    let compagnies = db::compagnies::list_all(&state.pool).await?;
    Ok(Json(compagnies))
}
