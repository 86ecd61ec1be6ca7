use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::{EvaluationEmployer, EvaluationReport, ReponseDetail};

use crate::api::ApiResult;
use crate::api::access::ensure_employe_access;
use crate::auth::CurrentUser;
use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

/// Load an evaluation the caller may read
async fn readable_evaluation(
    state: &AppState,
    current: &CurrentUser,
    evaluation_id: i64,
) -> ServiceResult<EvaluationEmployer> {
    let evaluation = db::evaluations::find(&state.pool, evaluation_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::EvaluationNotFound, evaluation_id))?;
    ensure_employe_access(&state.pool, current, &evaluation.employer_id).await?;
    Ok(evaluation)
}

/// GET /api/reponses/{evaluation_id}
pub async fn reponses(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(evaluation_id): Path<i64>,
) -> ApiResult<Vec<ReponseDetail>> {
    readable_evaluation(&state, &current, evaluation_id).await?;
    let lignes = db::reponses::details(&state.pool, evaluation_id).await?;
    Ok(Json(lignes))
}

/// GET /api/rapports/{evaluation_id}
pub async fn rapport(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(evaluation_id): Path<i64>,
) -> ApiResult<EvaluationReport> {
    let evaluation = readable_evaluation(&state, &current, evaluation_id).await?;
    let employe = db::employes::find(&state.pool, &evaluation.employer_id).await?;
    let lignes = db::reponses::details(&state.pool, evaluation_id).await?;
    Ok(Json(EvaluationReport::new(evaluation, employe, lignes)))
}
