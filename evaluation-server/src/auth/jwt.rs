//! JWT token service
//!
//! Issues and validates the bearer tokens handed out by `POST /login`.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::models::Role;
use thiserror::Error;

/// Token issuer written into (and required from) every token
pub const ISSUER: &str = "evaluation-server";

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 secret
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    pub issuer: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes,
            issuer: ISSUER.to_string(),
        }
    }
}

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User matricule (subject)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Role name (`admin`, `rh`, `chef`)
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token generation failed: {0}")]
    GenerationFailed(String),

    #[error("unknown role in token: {0}")]
    UnknownRole(String),
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_minutes", &self.config.expiration_minutes)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for a user
    pub fn generate_token(&self, matricule: &str, name: &str, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: matricule.to_string(),
            name: name.to_string(),
            role: role.as_str().to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Token part of an `Authorization: Bearer <token>` header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Authenticated user, injected into request extensions by `require_auth`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub matricule: String,
    pub name: String,
    pub role: Role,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = Role::from_db(&claims.role).ok_or(JwtError::UnknownRole(claims.role))?;
        Ok(Self {
            matricule: claims.sub,
            name: claims.name,
            role,
        })
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admin or RH
    pub fn can_manage(&self) -> bool {
        self.role.can_manage()
    }

    pub fn is_chef(&self) -> bool {
        self.role == Role::Chef
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig::new("test-secret-at-least-32-bytes-long!!", 60))
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = service();
        let token = service
            .generate_token("900", "Karim", Role::Chef)
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "900");
        assert_eq!(claims.name, "Karim");
        assert_eq!(claims.role, "chef");
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.exp - claims.iat, 3600);

        let user = CurrentUser::try_from(claims).unwrap();
        assert!(user.is_chef());
        assert!(!user.can_manage());
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::with_config(JwtConfig::new("test-secret-at-least-32-bytes-long!!", -10));
        let token = service.generate_token("1", "Admin", Role::Admin).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let token = service().generate_token("1", "Admin", Role::Admin).unwrap();
        let other =
            JwtService::with_config(JwtConfig::new("another-secret-at-least-32-bytes!!!", 60));
        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token() {
        assert!(matches!(
            service().validate_token("not.a.token"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_unknown_role_claim() {
        let claims = Claims {
            sub: "1".into(),
            name: "x".into(),
            role: "stagiaire".into(),
            exp: 0,
            iat: 0,
            iss: ISSUER.into(),
        };
        assert!(matches!(
            CurrentUser::try_from(claims),
            Err(JwtError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
