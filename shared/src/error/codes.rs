//! Unified error codes for the evaluation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Campaign (compagnie) errors
//! - 4xxx: Evaluation errors
//! - 5xxx: Question bank errors
//! - 8xxx: Employee and user errors
//! - 9xxx: System errors
//!
//! Default messages are the French strings shown to dashboard users.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its `u16` value so the frontend can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (matricule/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Too many login attempts from the same client
    TooManyRequests = 1008,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Cannot delete own account
    CannotDeleteSelf = 2006,

    // ==================== 3xxx: Campaign ====================
    /// No active campaign
    NoActiveCompagnie = 3002,
    /// An active campaign already exists
    ActiveCompagnieExists = 3003,
    /// Campaign start date missing
    CompagnieDateRequired = 3004,

    // ==================== 4xxx: Evaluation ====================
    /// Evaluation not found
    EvaluationNotFound = 4001,
    /// No in-progress evaluation for the employee
    EvaluationInProgressNotFound = 4002,
    /// No answer submitted
    EvaluationEmpty = 4003,
    /// RH modifications payload invalid
    InvalidModifications = 4004,
    /// None of the RH modifications matched an answer
    NoAnswerUpdated = 4005,
    /// Employee matricule missing or malformed
    InvalidMatricule = 4006,
    /// Submitted answers target several employees
    MixedMatricules = 4007,
    /// The employee already has a finished evaluation in the active campaign
    EvaluationAlreadySubmitted = 4008,

    // ==================== 5xxx: Question ====================
    /// Question not found
    QuestionNotFound = 5001,
    /// Fiche code missing
    FicheCodeRequired = 5002,
    /// Target fiche code already used
    FicheAlreadyExists = 5003,
    /// Source fiche has no question
    FicheNotFound = 5004,

    // ==================== 8xxx: Employee / User ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee matricule already exists
    EmployeeExists = 8002,
    /// User not found
    UserNotFound = 8101,
    /// User matricule already exists
    UserExists = 8102,
    /// Unknown role name
    RoleNotFound = 8103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Données invalides",
            ErrorCode::RequiredField => "Champs manquants",

            // Auth
            ErrorCode::NotAuthenticated => "Authentification requise",
            ErrorCode::InvalidCredentials => "ID ou mot de passe incorrect",
            ErrorCode::TokenExpired => "Session expirée, veuillez vous reconnecter",
            ErrorCode::TokenInvalid => "Jeton invalide",
            ErrorCode::TooManyRequests => "Trop de tentatives, réessayez plus tard",

            // Permission
            ErrorCode::PermissionDenied => "Accès non autorisé",
            ErrorCode::RoleRequired => "Rôle insuffisant pour cette action",
            ErrorCode::AdminRequired => "Action réservée à l'administrateur",
            ErrorCode::CannotDeleteSelf => "Impossible de supprimer votre propre compte",

            // Campaign
            ErrorCode::NoActiveCompagnie => "Aucune compagnie active trouvée.",
            ErrorCode::ActiveCompagnieExists => {
                "Une compagnie active existe déjà. Veuillez la désactiver avant d’en ajouter une nouvelle."
            }
            ErrorCode::CompagnieDateRequired => "La date de début est requise.",

            // Evaluation
            ErrorCode::EvaluationNotFound => "Aucune évaluation trouvée.",
            ErrorCode::EvaluationInProgressNotFound => {
                "Aucune évaluation en cours trouvée pour cet employé."
            }
            ErrorCode::EvaluationEmpty => "Aucune évaluation fournie.",
            ErrorCode::InvalidModifications => "Modifications invalides.",
            ErrorCode::NoAnswerUpdated => "Aucune modification n'a été appliquée.",
            ErrorCode::InvalidMatricule => "Matricule invalide.",
            ErrorCode::MixedMatricules => "Les réponses concernent plusieurs employés.",
            ErrorCode::EvaluationAlreadySubmitted => {
                "Cet employé a déjà été évalué pour la compagnie active."
            }

            // Question
            ErrorCode::QuestionNotFound => "Question introuvable",
            ErrorCode::FicheCodeRequired => "codeFiche est requis",
            ErrorCode::FicheAlreadyExists => "Le codefiche cible existe déjà.",
            ErrorCode::FicheNotFound => "Aucune question pour le codefiche source.",

            // Employee / User
            ErrorCode::EmployeeNotFound => "Employé non trouvé",
            ErrorCode::EmployeeExists => "Un employé avec ce matricule existe déjà.",
            ErrorCode::UserNotFound => "Utilisateur non trouvé",
            ErrorCode::UserExists => "Un utilisateur avec ce matricule existe déjà.",
            ErrorCode::RoleNotFound => "Rôle inconnu",

            // System
            ErrorCode::InternalError => "Erreur serveur",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1008 => Ok(ErrorCode::TooManyRequests),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),
            2006 => Ok(ErrorCode::CannotDeleteSelf),

            // Campaign
            3002 => Ok(ErrorCode::NoActiveCompagnie),
            3003 => Ok(ErrorCode::ActiveCompagnieExists),
            3004 => Ok(ErrorCode::CompagnieDateRequired),

            // Evaluation
            4001 => Ok(ErrorCode::EvaluationNotFound),
            4002 => Ok(ErrorCode::EvaluationInProgressNotFound),
            4003 => Ok(ErrorCode::EvaluationEmpty),
            4004 => Ok(ErrorCode::InvalidModifications),
            4005 => Ok(ErrorCode::NoAnswerUpdated),
            4006 => Ok(ErrorCode::InvalidMatricule),
            4007 => Ok(ErrorCode::MixedMatricules),
            4008 => Ok(ErrorCode::EvaluationAlreadySubmitted),

            // Question
            5001 => Ok(ErrorCode::QuestionNotFound),
            5002 => Ok(ErrorCode::FicheCodeRequired),
            5003 => Ok(ErrorCode::FicheAlreadyExists),
            5004 => Ok(ErrorCode::FicheNotFound),

            // Employee / User
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeExists),
            8101 => Ok(ErrorCode::UserNotFound),
            8102 => Ok(ErrorCode::UserExists),
            8103 => Ok(ErrorCode::RoleNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::NoActiveCompagnie.code(), 3002);
        assert_eq!(ErrorCode::EvaluationNotFound.code(), 4001);
        assert_eq!(ErrorCode::FicheAlreadyExists.code(), 5003);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::UserNotFound.code(), 8101);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_roundtrips_every_code() {
        let codes = [
            ErrorCode::TooManyRequests,
            ErrorCode::CannotDeleteSelf,
            ErrorCode::ActiveCompagnieExists,
            ErrorCode::MixedMatricules,
            ErrorCode::EvaluationAlreadySubmitted,
            ErrorCode::FicheNotFound,
            ErrorCode::RoleNotFound,
            ErrorCode::InternalError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_unknown_value() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "invalid error code: 4242"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::NoActiveCompagnie).unwrap();
        assert_eq!(json, "3002");
        let code: ErrorCode = serde_json::from_str("8101").unwrap();
        assert_eq!(code, ErrorCode::UserNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_messages_keep_dashboard_wording() {
        assert_eq!(
            ErrorCode::InvalidCredentials.message(),
            "ID ou mot de passe incorrect"
        );
        assert_eq!(ErrorCode::FicheCodeRequired.message(), "codeFiche est requis");
        assert_eq!(ErrorCode::InternalError.message(), "Erreur serveur");
    }
}
