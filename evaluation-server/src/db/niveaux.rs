use shared::models::Niveau;
use sqlx::PgPool;

pub async fn list(pool: &PgPool) -> Result<Vec<Niveau>, sqlx::Error> {
    sqlx::query_as("SELECT id, niveau FROM niveau ORDER BY id")
        .fetch_all(pool)
        .await
}
