use chrono::NaiveDate;
use shared::models::Compagnie;
use sqlx::{PgExecutor, PgPool};

use crate::error::is_unique_violation;

pub enum CreateOutcome {
    Created(Compagnie),
    /// Another campaign is still active
    ActiveExists,
}

/// Id of the active campaign, if any
pub async fn active_id<'e, E>(executor: E) -> Result<Option<i64>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT id FROM compagnie WHERE status ORDER BY id DESC LIMIT 1")
        .fetch_optional(executor)
        .await
}

pub async fn find_active(pool: &PgPool) -> Result<Option<Compagnie>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, date_debut, status FROM compagnie WHERE status ORDER BY id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}

/// Newest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<Compagnie>, sqlx::Error> {
    sqlx::query_as("SELECT id, date_debut, status FROM compagnie ORDER BY date_debut DESC, id DESC")
        .fetch_all(pool)
        .await
}

/// Open a new active campaign unless one is already running.
///
/// The pre-check runs in the same transaction as the insert; the partial
/// unique index `uq_compagnie_active` rejects a concurrent winner.
pub async fn create_exclusive(
    pool: &PgPool,
    date_debut: NaiveDate,
) -> Result<CreateOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if active_id(&mut *tx).await?.is_some() {
        return Ok(CreateOutcome::ActiveExists);
    }

    let inserted = sqlx::query_as(
        "INSERT INTO compagnie (date_debut, status) VALUES ($1, TRUE)
         RETURNING id, date_debut, status",
    )
    .bind(date_debut)
    .fetch_one(&mut *tx)
    .await;

    match inserted {
        Ok(compagnie) => {
            tx.commit().await?;
            Ok(CreateOutcome::Created(compagnie))
        }
        Err(e) if is_unique_violation(&e) => Ok(CreateOutcome::ActiveExists),
        Err(e) => Err(e),
    }
}

/// Returns the number of campaigns deactivated
pub async fn disable_active(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE compagnie SET status = FALSE WHERE status")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
