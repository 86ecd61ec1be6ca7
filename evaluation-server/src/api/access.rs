//! Per-employee access rules
//!
//! Admin and RH reach every employee; a chef only reaches employees whose
//! `chefhierarchique` is their own matricule.

use shared::error::{AppError, ErrorCode};
use sqlx::PgPool;

use crate::auth::CurrentUser;
use crate::db;
use crate::error::ServiceResult;
use crate::security_log;

/// 404 for an unknown employee, 403 when a chef is not its manager
pub async fn ensure_employe_access(
    pool: &PgPool,
    user: &CurrentUser,
    matricule: &str,
) -> ServiceResult<()> {
    let chef = db::employes::chef_of(pool, matricule)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::EmployeeNotFound, matricule))?;

    if user.is_chef() && chef.as_deref() != Some(user.matricule.as_str()) {
        security_log!(
            WARN,
            "employe_access_denied",
            matricule = %user.matricule,
            employe = %matricule
        );
        return Err(AppError::permission_denied("Cet employé n'est pas sous votre responsabilité").into());
    }
    Ok(())
}

/// A chef may only act for themself
pub fn ensure_self_unless_manager(user: &CurrentUser, matricule: &str) -> Result<(), AppError> {
    if user.is_chef() && user.matricule != matricule {
        security_log!(
            WARN,
            "chef_scope_denied",
            matricule = %user.matricule,
            requested = %matricule
        );
        return Err(AppError::new(ErrorCode::PermissionDenied));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn user(matricule: &str, role: Role) -> CurrentUser {
        CurrentUser {
            matricule: matricule.into(),
            name: "Test".into(),
            role,
        }
    }

    #[test]
    fn test_chef_scope() {
        assert!(ensure_self_unless_manager(&user("900", Role::Chef), "900").is_ok());
        let err = ensure_self_unless_manager(&user("900", Role::Chef), "901").unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert!(ensure_self_unless_manager(&user("1", Role::Rh), "901").is_ok());
        assert!(ensure_self_unless_manager(&user("1", Role::Admin), "901").is_ok());
    }
}
