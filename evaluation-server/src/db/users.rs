use shared::models::{Role, UserResponse};
use sqlx::PgPool;

/// Full user row, password hash included; never serialized
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub matricule: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub hashed_password: String,
    pub role: String,
}

impl UserRow {
    pub fn role(&self) -> Option<Role> {
        Role::from_db(&self.role)
    }
}

/// Field changes for `update`; `None` keeps the stored value
#[derive(Default)]
pub struct UserChanges<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub role: Option<Role>,
    pub hashed_password: Option<&'a str>,
}

pub async fn find(pool: &PgPool, matricule: &str) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT matricule, name, email, hashed_password, role FROM users WHERE matricule = $1",
    )
    .bind(matricule)
    .fetch_optional(pool)
    .await
}

pub async fn find_public(
    pool: &PgPool,
    matricule: &str,
) -> Result<Option<UserResponse>, sqlx::Error> {
    sqlx::query_as("SELECT matricule, name, email, role FROM users WHERE matricule = $1")
        .bind(matricule)
        .fetch_optional(pool)
        .await
}

/// Every account except admins
pub async fn list_non_admin(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
    sqlx::query_as(
        "SELECT matricule, name, email, role FROM users WHERE role <> 'admin' ORDER BY matricule",
    )
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    matricule: &str,
    name: &str,
    email: Option<&str>,
    hashed_password: &str,
    role: Role,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (matricule, name, email, hashed_password, role)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(matricule)
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .bind(role.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns the number of rows touched (0 = unknown matricule)
pub async fn update(
    pool: &PgPool,
    matricule: &str,
    changes: UserChanges<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            role = COALESCE($4, role),
            hashed_password = COALESCE($5, hashed_password)
         WHERE matricule = $1",
    )
    .bind(matricule)
    .bind(changes.name)
    .bind(changes.email)
    .bind(changes.role.map(|r| r.as_str()))
    .bind(changes.hashed_password)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, matricule: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE matricule = $1")
        .bind(matricule)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_by_role(pool: &PgPool, role: Role) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
        .bind(role.as_str())
        .fetch_one(pool)
        .await
}
