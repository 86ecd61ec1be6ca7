use shared::models::{ReponseChef, ReponseDetail};
use sqlx::PgPool;

use super::evaluations;

/// Chef notes of the employee's latest in-progress evaluation (empty when none)
pub async fn chef_notes_for_in_progress(
    pool: &PgPool,
    matricule: &str,
) -> Result<Vec<ReponseChef>, sqlx::Error> {
    let Some(evaluation_id) = evaluations::latest_in_progress_id(pool, matricule).await? else {
        return Ok(Vec::new());
    };
    sqlx::query_as("SELECT question_id, notechef FROM reponse WHERE evaluation_id = $1 ORDER BY id")
        .bind(evaluation_id)
        .fetch_all(pool)
        .await
}

/// Answer lines of an evaluation with their question text
pub async fn details(pool: &PgPool, evaluation_id: i64) -> Result<Vec<ReponseDetail>, sqlx::Error> {
    sqlx::query_as(
        "SELECT r.id, r.question_id, q.texte AS question_texte, q.rubrique, q.code,
                q.niveaurequis, r.notechef, r.noterh
         FROM reponse r
         JOIN question q ON q.id = r.question_id
         WHERE r.evaluation_id = $1
         ORDER BY r.id",
    )
    .bind(evaluation_id)
    .fetch_all(pool)
    .await
}
