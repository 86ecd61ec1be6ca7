//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category derived from the leading digit of the error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Campaign errors (3xxx)
    Compagnie,
    /// Evaluation errors (4xxx)
    Evaluation,
    /// Question bank errors (5xxx)
    Question,
    /// Employee and user errors (8xxx)
    Employee,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Compagnie,
            4000..5000 => Self::Evaluation,
            5000..6000 => Self::Question,
            8000..9000 => Self::Employee,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Compagnie => "compagnie",
            Self::Evaluation => "evaluation",
            Self::Question => "question",
            Self::Employee => "employee",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2006), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Compagnie);
        assert_eq!(ErrorCategory::from_code(4005), ErrorCategory::Evaluation);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Question);
        assert_eq!(ErrorCategory::from_code(8101), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        // Unassigned ranges fall back to system
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::InvalidCredentials.category(),
            ErrorCategory::Auth
        );
        assert_eq!(
            ErrorCode::NoActiveCompagnie.category(),
            ErrorCategory::Compagnie
        );
        assert_eq!(
            ErrorCode::NoAnswerUpdated.category(),
            ErrorCategory::Evaluation
        );
        assert_eq!(
            ErrorCode::FicheAlreadyExists.category(),
            ErrorCategory::Question
        );
        assert_eq!(ErrorCode::UserExists.category(), ErrorCategory::Employee);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Compagnie).unwrap();
        assert_eq!(json, "\"compagnie\"");
        let category: ErrorCategory = serde_json::from_str("\"evaluation\"").unwrap();
        assert_eq!(category, ErrorCategory::Evaluation);
        assert_eq!(category.name(), "evaluation");
    }
}
