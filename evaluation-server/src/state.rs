//! Application state

use std::sync::Arc;

use shared::models::Role;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::{JwtConfig, JwtService, RateLimiter};
use crate::config::{BootstrapAdmin, Config};
use crate::db;
use crate::error::BoxError;
use crate::util::hash_password;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Token issue/validation
    pub jwt: Arc<JwtService>,
    /// Rate limiter for the login route
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Connect, run migrations and seed the bootstrap admin
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        if let Some(admin) = &config.bootstrap_admin {
            seed_admin(&pool, admin).await?;
        }

        Ok(Self::from_parts(
            pool,
            JwtConfig::new(&config.jwt_secret, config.jwt_expiration_minutes),
        ))
    }

    /// Assemble state from an existing pool (tests, tooling)
    pub fn from_parts(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            pool,
            jwt: Arc::new(JwtService::with_config(jwt)),
            rate_limiter: RateLimiter::new(),
        }
    }
}

/// Create the first admin account when the users table has none
async fn seed_admin(pool: &PgPool, admin: &BootstrapAdmin) -> Result<(), BoxError> {
    if db::users::count_by_role(pool, Role::Admin).await? > 0 {
        return Ok(());
    }
    let hashed = hash_password(&admin.password).map_err(|e| e.to_string())?;
    db::users::create(
        pool,
        &admin.matricule,
        "Administrateur",
        None,
        &hashed,
        Role::Admin,
    )
    .await?;
    tracing::info!(matricule = %admin.matricule, "Bootstrap admin created");
    Ok(())
}
