//! Server configuration

use crate::error::BoxError;

/// Server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// HS256 secret for dashboard tokens
    pub jwt_secret: String,
    /// Token lifetime
    pub jwt_expiration_minutes: i64,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Admin account created at startup when no admin exists
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Credentials of the first admin account
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub matricule: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("matricule", &self.matricule)
            .field("password", &"***")
            .finish()
    }
}

/// First set, non-empty variable among `names`
fn env_any(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(names: &[&str], environment: &str) -> Result<String, BoxError> {
        match env_any(names) {
            Some(val) => Ok(val),
            None if environment == "development" => {
                Ok(format!("dev-{}-not-for-production", names[0]))
            }
            None => Err(format!("{} must be set in {environment} environment", names[0]).into()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let bootstrap_admin = match (
            env_any(&["BOOTSTRAP_ADMIN_MATRICULE"]),
            env_any(&["BOOTSTRAP_ADMIN_PASSWORD"]),
        ) {
            (Some(matricule), Some(password)) => Some(BootstrapAdmin {
                matricule,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: env_any(&["DATABASE_URL", "DATABASE"])
                .ok_or("DATABASE_URL must be set")?,
            http_port: env_parse("HTTP_PORT", 8080),
            jwt_secret: Self::require_secret(&["JWT_SECRET", "SECRET"], &environment)?,
            jwt_expiration_minutes: env_parse("JWT_EXPIRATION_MINUTES", 60),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 10),
            environment,
            bootstrap_admin,
        })
    }
}
