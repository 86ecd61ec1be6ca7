//! Login endpoint

use axum::{Json, extract::State};
use shared::error::AppError;
use shared::models::{LoginRequest, LoginResponse};
use shared::util::non_blank;

use crate::db;
use crate::security_log;
use crate::state::AppState;
use crate::util::verify_password;

use super::ApiResult;

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let (Some(matricule), Some(password)) =
        (req.matricule.as_deref(), non_blank(req.password.as_deref()))
    else {
        return Err(AppError::required_fields(
            "Matricule et mot de passe requis",
            &["matricule", "password"],
        )
        .into());
    };

    let user = db::users::find(&state.pool, matricule)
        .await?
        .filter(|u| verify_password(password, &u.hashed_password));

    let Some(user) = user else {
        security_log!(WARN, "login_failed", matricule = %matricule);
        return Err(AppError::invalid_credentials().into());
    };

    let role = user.role().ok_or_else(|| {
        tracing::error!(matricule = %user.matricule, role = %user.role, "Stored role is invalid");
        AppError::internal("Rôle utilisateur invalide")
    })?;
    let nom = user.name.clone().unwrap_or_default();

    let token = state
        .jwt
        .generate_token(&user.matricule, &nom, role)
        .map_err(|e| {
            tracing::error!("JWT creation failed: {e}");
            AppError::internal("Erreur lors de la génération du jeton")
        })?;

    security_log!(INFO, "login_success", matricule = %user.matricule, role = %role);

    Ok(Json(LoginResponse {
        token,
        matricule: user.matricule,
        nom,
        role: role.as_str().to_string(),
    }))
}
