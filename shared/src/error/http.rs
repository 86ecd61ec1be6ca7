//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::EvaluationNotFound
            | Self::EvaluationInProgressNotFound
            | Self::QuestionNotFound
            | Self::FicheNotFound
            | Self::EmployeeNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::ActiveCompagnieExists
            | Self::EvaluationAlreadySubmitted
            | Self::FicheAlreadyExists
            | Self::EmployeeExists
            | Self::UserExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::RoleRequired | Self::AdminRequired => {
                StatusCode::FORBIDDEN
            }

            // 422 Business precondition
            Self::NoActiveCompagnie => StatusCode::UNPROCESSABLE_ENTITY,

            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(
            ErrorCode::EmployeeNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::EvaluationInProgressNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::ActiveCompagnieExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::FicheAlreadyExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::UserExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::EvaluationAlreadySubmitted.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_auth_and_permission_status() {
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::TokenExpired.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::RoleRequired.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::TooManyRequests.http_status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_business_rule_status() {
        assert_eq!(
            ErrorCode::NoActiveCompagnie.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidModifications.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::NoAnswerUpdated.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::CannotDeleteSelf.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
