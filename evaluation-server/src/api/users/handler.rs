//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{ProfileUpdate, Role, UserCreate, UserResponse, UserUpdate};
use shared::util::non_blank;

use crate::auth::CurrentUser;
use crate::db;
use crate::db::users::UserChanges;
use crate::error::{ServiceError, map_unique};
use crate::security_log;
use crate::state::AppState;
use crate::util::hash_password;

use crate::api::ApiResult;

fn parse_role(value: &str) -> Result<Role, AppError> {
    Role::from_db(value).ok_or_else(|| AppError::new(ErrorCode::RoleNotFound).with_detail("role", value))
}

fn hash(password: &str) -> Result<String, AppError> {
    hash_password(password).map_err(|e| {
        tracing::error!("Password hashing failed: {e}");
        AppError::internal("Erreur lors du hachage du mot de passe")
    })
}

/// Only an admin may grant or touch the admin role
fn ensure_admin_for(user: &CurrentUser, role: Role) -> Result<(), AppError> {
    if role == Role::Admin && !user.is_admin() {
        security_log!(WARN, "admin_required", matricule = %user.matricule);
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    Ok(())
}

/// Profile access: the user themself or an admin
fn ensure_self_or_admin(user: &CurrentUser, matricule: &str) -> Result<(), AppError> {
    if user.matricule != matricule && !user.is_admin() {
        security_log!(
            WARN,
            "profile_access_denied",
            matricule = %user.matricule,
            requested = %matricule
        );
        return Err(AppError::new(ErrorCode::PermissionDenied));
    }
    Ok(())
}

/// GET /api/chef - every non-admin account
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let users = db::users::list_non_admin(&state.pool).await?;
    Ok(Json(users))
}

/// POST /adduser
pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let missing = payload.missing_fields();
    let (Some(matricule), Some(name), Some(password), Some(email), Some(role)) = (
        payload.matricule.as_deref(),
        payload.name.as_deref(),
        non_blank(payload.password.as_deref()),
        payload.email.as_deref(),
        payload.role.as_deref(),
    ) else {
        return Err(AppError::required_fields("Champs manquants", &missing).into());
    };
    let role = parse_role(role)?;
    ensure_admin_for(&current, role)?;

    let hashed = hash(password)?;
    db::users::create(
        &state.pool,
        matricule,
        name,
        Some(email),
        &hashed,
        role,
    )
    .await
    .map_err(|e| map_unique(e, ErrorCode::UserExists))?;

    tracing::info!(matricule = %matricule, role = %role, by = %current.matricule, "User created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Utilisateur ajouté avec succès" })),
    ))
}

/// PUT /api/chef/{matricule} - blank password keeps the current one
pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> ApiResult<Value> {
    let target = db::users::find(&state.pool, &matricule)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, matricule.as_str()))?;

    if let Some(role) = target.role() {
        ensure_admin_for(&current, role)?;
    }
    let role = payload.role.as_deref().map(parse_role).transpose()?;
    if let Some(role) = role {
        ensure_admin_for(&current, role)?;
    }

    let hashed = non_blank(payload.password.as_deref()).map(hash).transpose()?;
    db::users::update(
        &state.pool,
        &matricule,
        UserChanges {
            name: payload.name.as_deref(),
            email: payload.email.as_deref(),
            role,
            hashed_password: hashed.as_deref(),
        },
    )
    .await?;

    Ok(Json(json!({ "message": "Utilisateur mis à jour avec succès" })))
}

/// DELETE /api/chef/{matricule}
pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
) -> ApiResult<Value> {
    if current.matricule == matricule {
        return Err(AppError::new(ErrorCode::CannotDeleteSelf).into());
    }

    let target = db::users::find(&state.pool, &matricule)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, matricule.as_str()))?;
    if let Some(role) = target.role() {
        ensure_admin_for(&current, role)?;
    }

    db::users::delete(&state.pool, &matricule).await?;
    tracing::info!(matricule = %matricule, by = %current.matricule, "User deleted");

    Ok(Json(json!({ "message": "Chef supprimé avec succès" })))
}

/// GET /api/user/{matricule}
pub async fn get_profile(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
) -> ApiResult<UserResponse> {
    ensure_self_or_admin(&current, &matricule)?;
    let user = db::users::find_public(&state.pool, &matricule)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, matricule.as_str()))?;
    Ok(Json(user))
}

/// PUT /api/user/{matricule} - blank password keeps the current one
pub async fn update_profile(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(matricule): Path<String>,
    Json(payload): Json<ProfileUpdate>,
) -> ApiResult<Value> {
    ensure_self_or_admin(&current, &matricule)?;

    let hashed = non_blank(payload.password.as_deref()).map(hash).transpose()?;
    let updated = db::users::update(
        &state.pool,
        &matricule,
        UserChanges {
            name: payload.name.as_deref(),
            email: payload.email.as_deref(),
            role: None,
            hashed_password: hashed.as_deref(),
        },
    )
    .await?;

    if updated == 0 {
        return Err(AppError::not_found(ErrorCode::UserNotFound, matricule).into());
    }
    Ok(Json(json!({ "message": "Profil mis à jour avec succès" })))
}
