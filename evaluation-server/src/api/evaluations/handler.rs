//! Evaluation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    AnswerSubmission, CompletedQuery, EvaluationHistoryItem, EvaluationListItem,
    EvaluationQuestion, EvaluationStatus, MatriculeQuery, ReponseChef, RevisionResult, RhRevision,
    SubmissionResult, ValidationResult,
};
use shared::util::is_numeric_matricule;

use crate::api::ApiResult;
use crate::api::access::ensure_employe_access;
use crate::auth::CurrentUser;
use crate::db;
use crate::db::evaluations::{RhAction, RhOutcome, SubmitOutcome};
use crate::error::{ServiceError, is_unique_violation, map_foreign_key};
use crate::state::AppState;

/// GET /api/reponses_non_terminees?matricule= - chef notes of the draft
pub async fn in_progress_answers(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<MatriculeQuery>,
) -> ApiResult<Vec<ReponseChef>> {
    let matricule = query
        .matricule
        .filter(|m| is_numeric_matricule(m))
        .ok_or_else(|| AppError::new(ErrorCode::InvalidMatricule))?;
    ensure_employe_access(&state.pool, &current, &matricule).await?;

    let reponses = db::reponses::chef_notes_for_in_progress(&state.pool, &matricule).await?;
    Ok(Json(reponses))
}

/// POST /api/evaluation_answers - save or submit a chef evaluation
pub async fn submit(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<AnswerSubmission>,
) -> Result<(StatusCode, Json<SubmissionResult>), ServiceError> {
    let matricule = payload.matricule()?;
    ensure_employe_access(&state.pool, &current, matricule).await?;

    let status = payload.requested_status();
    let total = payload.total_note();

    let outcome = db::evaluations::submit_answers(
        &state.pool,
        matricule,
        &payload.evaluations,
        status,
        total,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::new(ErrorCode::EvaluationAlreadySubmitted).into()
        } else {
            map_foreign_key(e, AppError::new(ErrorCode::QuestionNotFound))
        }
    })?;

    let evaluation_id = match outcome {
        SubmitOutcome::Saved(id) => id,
        SubmitOutcome::NoActiveCompagnie => {
            return Err(AppError::new(ErrorCode::NoActiveCompagnie).into());
        }
        SubmitOutcome::AlreadySubmitted => {
            return Err(AppError::new(ErrorCode::EvaluationAlreadySubmitted)
                .with_detail("matricule", matricule)
                .into());
        }
    };

    tracing::info!(
        evaluation_id,
        matricule = %matricule,
        status = status.as_str(),
        total,
        by = %current.matricule,
        "Evaluation answers saved"
    );

    let message = match status {
        EvaluationStatus::Termine => "Évaluation soumise avec succès",
        EvaluationStatus::EnCours => "Évaluation enregistrée avec succès",
    };
    Ok((
        StatusCode::CREATED,
        Json(SubmissionResult {
            message: message.to_string(),
            evaluation_id,
        }),
    ))
}

/// PUT /api/evaluations/{matricule}/update - RH revision
pub async fn revise(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
    Json(payload): Json<RhRevision>,
) -> ApiResult<RevisionResult> {
    let notes = payload.parse()?;
    match db::evaluations::apply_rh_notes(&state.pool, &matricule, &notes, RhAction::Revise).await? {
        RhOutcome::Updated { total } => {
            tracing::info!(matricule = %matricule, total, "RH notes revised");
            Ok(Json(RevisionResult {
                message: "Mise à jour réussie".to_string(),
                total_note: total,
            }))
        }
        RhOutcome::NotFound | RhOutcome::NothingUpdated => {
            Err(AppError::not_found(ErrorCode::EvaluationNotFound, matricule).into())
        }
    }
}

/// POST /api/evaluations/{matricule}/valider - RH revision and validation
pub async fn validate(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
    Json(payload): Json<RhRevision>,
) -> ApiResult<ValidationResult> {
    let notes = payload.parse()?;
    match db::evaluations::apply_rh_notes(&state.pool, &matricule, &notes, RhAction::Validate)
        .await?
    {
        RhOutcome::Updated { total } => {
            tracing::info!(matricule = %matricule, total, "Evaluation validated");
            Ok(Json(ValidationResult {
                success: true,
                message: "Réponses RH mises à jour et note totale recalculée avec succès."
                    .to_string(),
                total_note: total,
            }))
        }
        RhOutcome::NothingUpdated => Err(AppError::new(ErrorCode::NoAnswerUpdated).into()),
        RhOutcome::NotFound => {
            Err(AppError::not_found(ErrorCode::EvaluationNotFound, matricule).into())
        }
    }
}

/// GET /api/evaluations/{matricule}/questions - answers in the active campaign
pub async fn questions(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
) -> ApiResult<Vec<EvaluationQuestion>> {
    ensure_employe_access(&state.pool, &current, &matricule).await?;
    let questions = db::evaluations::questions_for_employe(&state.pool, &matricule).await?;
    Ok(Json(questions))
}

/// GET /api/evaluations/validated - finished, awaiting RH validation
pub async fn list_to_validate(State(state): State<AppState>) -> ApiResult<Vec<EvaluationListItem>> {
    let evaluations = db::evaluations::list_completed_unvalidated(&state.pool).await?;
    Ok(Json(evaluations))
}

/// GET /api/evaluations/terminer - a chef only sees their own employees
pub async fn list_completed(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<CompletedQuery>,
) -> ApiResult<Vec<EvaluationListItem>> {
    let chef = if current.is_chef() {
        Some(current.matricule.as_str())
    } else {
        query.matricule_chef.as_deref()
    };
    let evaluations = db::evaluations::list_completed(&state.pool, chef).await?;
    Ok(Json(evaluations))
}

/// GET /api/evaluationsemp/{matricule} - history, newest campaign first
pub async fn history(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
) -> ApiResult<Vec<EvaluationHistoryItem>> {
    ensure_employe_access(&state.pool, &current, &matricule).await?;
    let history = db::evaluations::history(&state.pool, &matricule).await?;
    Ok(Json(history))
}
