//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{ChefEmploye, Employe, EmployeInput, EmployeListItem};

use crate::api::ApiResult;
use crate::api::access::{ensure_employe_access, ensure_self_unless_manager};
use crate::auth::CurrentUser;
use crate::db;
use crate::error::{ServiceError, is_foreign_key_violation, is_unique_violation};
use crate::state::AppState;

fn required_matricule(input: &EmployeInput) -> Result<&str, AppError> {
    input
        .matriculesalarie
        .as_deref()
        .ok_or_else(|| AppError::required_fields("Matricule salarié requis", &["matriculesalarie"]))
}

/// Unknown `chefhierarchique` surfaces as a foreign-key violation
fn map_write_error(err: sqlx::Error, input: &EmployeInput) -> ServiceError {
    if is_unique_violation(&err) {
        AppError::new(ErrorCode::EmployeeExists).into()
    } else if is_foreign_key_violation(&err) {
        let mut app = AppError::validation("Chef hiérarchique inconnu");
        if let Some(chef) = &input.chefhierarchique {
            app = app.with_detail("chefhierarchique", chef.as_str());
        }
        app.into()
    } else {
        err.into()
    }
}

/// GET /employe - all employees, birth date as DD/MM/YYYY
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<EmployeListItem>> {
    let employes = db::employes::list_all(&state.pool).await?;
    Ok(Json(employes.into_iter().map(EmployeListItem::from).collect()))
}

/// GET /api/employe/{matricule}
pub async fn get_by_id(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
) -> ApiResult<Employe> {
    ensure_employe_access(&state.pool, &current, &matricule).await?;
    let employe = db::employes::find(&state.pool, &matricule)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::EmployeeNotFound, matricule))?;
    Ok(Json(employe))
}

/// POST /api/employe
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeInput>,
) -> Result<(StatusCode, Json<Employe>), ServiceError> {
    let matricule = required_matricule(&payload)?;
    let employe = db::employes::create(&state.pool, matricule, &payload)
        .await
        .map_err(|e| map_write_error(e, &payload))?;

    tracing::info!(matricule = %employe.matriculesalarie, "Employe created");
    Ok((StatusCode::CREATED, Json(employe)))
}

/// PUT /api/employe/update - full row keyed by `matriculesalarie`
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<EmployeInput>,
) -> ApiResult<Value> {
    let matricule = required_matricule(&payload)?;
    let updated = db::employes::update(&state.pool, matricule, &payload)
        .await
        .map_err(|e| map_write_error(e, &payload))?;

    if updated == 0 {
        return Err(AppError::not_found(ErrorCode::EmployeeNotFound, matricule).into());
    }
    Ok(Json(json!({ "message": "Employé mis à jour avec succès" })))
}

/// DELETE /api/employe/{matricule}
pub async fn delete(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
) -> ApiResult<Value> {
    if db::employes::delete(&state.pool, &matricule).await? == 0 {
        return Err(AppError::not_found(ErrorCode::EmployeeNotFound, matricule).into());
    }
    tracing::info!(matricule = %matricule, "Employe deleted");
    Ok(Json(json!({ "message": "Employé supprimé avec succès." })))
}

/// GET /api/employes/chef/{matricule_chef} - employees still to evaluate
pub async fn pending_for_chef(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule_chef): Path<String>,
) -> ApiResult<Vec<ChefEmploye>> {
    ensure_self_unless_manager(&current, &matricule_chef)?;
    let employes = db::employes::pending_for_chef(&state.pool, &matricule_chef).await?;
    Ok(Json(employes))
}
