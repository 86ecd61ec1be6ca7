//! Question API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    CustomQuestion, CustomQuestionCreate, FicheDuplicate, FicheQuery, LegacyQuestionInput,
    MatriculeQuery, Question, QuestionInput,
};
use shared::util::non_blank;

use crate::api::ApiResult;
use crate::api::access::ensure_employe_access;
use crate::auth::CurrentUser;
use crate::db;
use crate::db::questions::DuplicateOutcome;
use crate::error::ServiceError;
use crate::state::AppState;

type Created<T> = Result<(StatusCode, Json<T>), ServiceError>;

/// `codefiche` and `texte` are NOT NULL columns
fn require_fiche_and_text(input: &QuestionInput) -> Result<(), AppError> {
    let missing: Vec<&str> = [
        ("codefiche", input.codefiche.is_none()),
        ("texte", input.texte.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::required_fields("Champs obligatoires manquants.", &missing))
    }
}

/// GET /api/questions?codeFiche= - active questions of one fiche
pub async fn list_by_fiche(
    State(state): State<AppState>,
    Query(query): Query<FicheQuery>,
) -> ApiResult<Vec<Question>> {
    let code_fiche = non_blank(query.code_fiche.as_deref())
        .ok_or_else(|| AppError::new(ErrorCode::FicheCodeRequired))?;
    let questions = db::questions::list_active_by_fiche(&state.pool, code_fiche).await?;
    Ok(Json(questions))
}

/// GET /api/lesquestions
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Vec<Question>> {
    let questions = db::questions::list_all(&state.pool).await?;
    Ok(Json(questions))
}

/// POST /api/questions - every descriptive field is required
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<QuestionInput>,
) -> Created<Question> {
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::required_fields("Champs obligatoires manquants.", &missing).into());
    }
    let question = db::questions::create(&state.pool, &payload).await?;
    tracing::info!(id = question.id, codefiche = %question.codefiche, "Question created");
    Ok((StatusCode::CREATED, Json(question)))
}

/// POST /Ajouter - PascalCase form payload
pub async fn create_legacy(
    State(state): State<AppState>,
    Json(payload): Json<LegacyQuestionInput>,
) -> Created<Value> {
    let input = QuestionInput::from(payload);
    require_fiche_and_text(&input)?;
    let question = db::questions::create(&state.pool, &input).await?;
    tracing::info!(id = question.id, codefiche = %question.codefiche, "Question created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Question enregistrée avec succès" })),
    ))
}

/// PUT /api/questions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<QuestionInput>,
) -> ApiResult<Value> {
    require_fiche_and_text(&payload)?;
    if db::questions::update(&state.pool, id, &payload).await? == 0 {
        return Err(AppError::not_found(ErrorCode::QuestionNotFound, id).into());
    }
    Ok(Json(json!({ "message": "Mise à jour réussie" })))
}

/// DELETE /api/questions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Value> {
    if db::questions::delete(&state.pool, id).await? == 0 {
        return Err(AppError::not_found(ErrorCode::QuestionNotFound, id).into());
    }
    Ok(Json(json!({ "message": "Supprimé avec succès" })))
}

/// DELETE /api/questions/fiche/{codefiche}
pub async fn delete_fiche(
    State(state): State<AppState>,
    Path(codefiche): Path<String>,
) -> ApiResult<Value> {
    let deleted = db::questions::delete_fiche(&state.pool, &codefiche).await?;
    tracing::info!(codefiche = %codefiche, deleted, "Fiche deleted");
    Ok(Json(json!({
        "message": format!("Questions du codefiche {codefiche} supprimées."),
        "deleted": deleted,
    })))
}

/// POST /api/dupliquer-fiche
pub async fn duplicate_fiche(
    State(state): State<AppState>,
    Json(payload): Json<FicheDuplicate>,
) -> Created<Value> {
    let (Some(source), Some(target)) = (
        payload.source_codefiche.as_deref(),
        payload.new_codefiche.as_deref(),
    ) else {
        return Err(AppError::required_fields(
            "Champs manquants",
            &["sourceCodefiche", "newCodefiche"],
        )
        .into());
    };

    match db::questions::duplicate_fiche(&state.pool, source, target).await? {
        DuplicateOutcome::Copied(copied) => {
            tracing::info!(source = %source, target = %target, copied, "Fiche duplicated");
            Ok((
                StatusCode::CREATED,
                Json(json!({ "message": "Fiche dupliquée avec succès.", "copied": copied })),
            ))
        }
        DuplicateOutcome::TargetExists => Err(AppError::new(ErrorCode::FicheAlreadyExists)
            .with_detail("codefiche", target)
            .into()),
        DuplicateOutcome::SourceEmpty => Err(AppError::new(ErrorCode::FicheNotFound)
            .with_detail("codefiche", source)
            .into()),
    }
}

/// GET /api/rubriques
pub async fn rubriques(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let rubriques = db::questions::rubriques(&state.pool).await?;
    Ok(Json(rubriques))
}

/// GET /api/questions_personnalisees?matricule=
pub async fn list_custom(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<MatriculeQuery>,
) -> ApiResult<Vec<CustomQuestion>> {
    let matricule = query
        .matricule
        .ok_or_else(|| AppError::required_fields("Matricule est requis", &["matricule"]))?;
    ensure_employe_access(&state.pool, &current, &matricule).await?;
    let questions = db::questions::custom_for_employe(&state.pool, &matricule).await?;
    Ok(Json(questions))
}

/// POST /api/question_personnalisee - custom question plus its empty answer
pub async fn create_custom(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<CustomQuestionCreate>,
) -> Created<Value> {
    let (Some(texte), Some(niveaurequis), Some(matricule)) = (
        payload.texte.as_deref(),
        payload.niveaurequis,
        payload.matricule_employe.as_deref(),
    ) else {
        let missing: Vec<&str> = [
            ("texte", payload.texte.is_none()),
            ("niveaurequis", payload.niveaurequis.is_none()),
            ("matricule_employe", payload.matricule_employe.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect();
        return Err(AppError::required_fields("Champs manquants", &missing).into());
    };

    ensure_employe_access(&state.pool, &current, matricule).await?;

    let evaluation_id = db::evaluations::latest_in_progress_id(&state.pool, matricule)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EvaluationInProgressNotFound))?;

    let id = db::questions::create_custom(
        &state.pool,
        evaluation_id,
        texte,
        payload.rubrique.as_deref(),
        niveaurequis,
    )
    .await?;

    tracing::info!(id, evaluation_id, matricule = %matricule, "Custom question created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Question et réponse initiale enregistrées", "id": id })),
    ))
}
