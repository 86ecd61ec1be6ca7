use shared::models::{CUSTOM_FICHE, CustomQuestion, Question, QuestionInput};
use sqlx::PgPool;

const COLUMNS: &str = "id, codefiche, code, profil, rubrique, texte, niveaurequis, \
    sousprocess, est_active, created_at";

pub enum DuplicateOutcome {
    Copied(u64),
    TargetExists,
    SourceEmpty,
}

/// Active questions of a fiche, in creation order
pub async fn list_active_by_fiche(
    pool: &PgPool,
    codefiche: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM question
         WHERE codefiche = $1 AND est_active
         ORDER BY created_at, id"
    ))
    .bind(codefiche)
    .fetch_all(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM question ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Insert a validated question; `est_active` defaults to true
pub async fn create(pool: &PgPool, input: &QuestionInput) -> Result<Question, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO question
            (codefiche, code, profil, rubrique, texte, niveaurequis, sousprocess, est_active, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
         RETURNING {COLUMNS}"
    ))
    .bind(&input.codefiche)
    .bind(&input.code)
    .bind(&input.profil)
    .bind(&input.rubrique)
    .bind(&input.texte)
    .bind(input.niveaurequis)
    .bind(&input.sousprocess)
    .bind(input.est_active.unwrap_or(true))
    .fetch_one(pool)
    .await
}

/// Overwrite the editable columns; `est_active` is kept when absent
pub async fn update(pool: &PgPool, id: i64, input: &QuestionInput) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE question SET
            codefiche = $2, code = $3, profil = $4, rubrique = $5, texte = $6,
            niveaurequis = $7, sousprocess = $8, est_active = COALESCE($9, est_active)
         WHERE id = $1",
    )
    .bind(id)
    .bind(&input.codefiche)
    .bind(&input.code)
    .bind(&input.profil)
    .bind(&input.rubrique)
    .bind(&input.texte)
    .bind(input.niveaurequis)
    .bind(&input.sousprocess)
    .bind(input.est_active)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM question WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_fiche(pool: &PgPool, codefiche: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM question WHERE codefiche = $1")
        .bind(codefiche)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Copy every question of `source` into a new fiche `target`
pub async fn duplicate_fiche(
    pool: &PgPool,
    source: &str,
    target: &str,
) -> Result<DuplicateOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let target_exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM question WHERE codefiche = $1)")
            .bind(target)
            .fetch_one(&mut *tx)
            .await?;
    if target_exists {
        return Ok(DuplicateOutcome::TargetExists);
    }

    let copied = sqlx::query(
        "INSERT INTO question
            (codefiche, code, profil, rubrique, texte, niveaurequis, sousprocess, est_active, created_at)
         SELECT $2, code, profil, rubrique, texte, niveaurequis, sousprocess, est_active, NOW()
         FROM question WHERE codefiche = $1
         ORDER BY created_at, id",
    )
    .bind(source)
    .bind(target)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if copied == 0 {
        return Ok(DuplicateOutcome::SourceEmpty);
    }

    tx.commit().await?;
    Ok(DuplicateOutcome::Copied(copied))
}

/// Distinct non-null rubriques, sorted
pub async fn rubriques(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT DISTINCT rubrique FROM question WHERE rubrique IS NOT NULL ORDER BY rubrique",
    )
    .fetch_all(pool)
    .await
}

/// Custom questions attached to the employee's in-progress evaluation
pub async fn custom_for_employe(
    pool: &PgPool,
    matricule: &str,
) -> Result<Vec<CustomQuestion>, sqlx::Error> {
    sqlx::query_as(
        "SELECT q.id, q.texte, q.rubrique, q.niveaurequis
         FROM reponse r
         JOIN question q ON q.id = r.question_id
         JOIN evaluation_employer e ON e.id = r.evaluation_id
         WHERE e.employer_id = $1 AND q.codefiche = $2 AND e.status <> 'Terminé'
         ORDER BY q.id",
    )
    .bind(matricule)
    .bind(CUSTOM_FICHE)
    .fetch_all(pool)
    .await
}

/// Create a custom question and its empty answer row on `evaluation_id`
pub async fn create_custom(
    pool: &PgPool,
    evaluation_id: i64,
    texte: &str,
    rubrique: Option<&str>,
    niveaurequis: i32,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let question_id: i64 = sqlx::query_scalar(
        "INSERT INTO question (codefiche, texte, rubrique, niveaurequis, created_at)
         VALUES ($1, $2, $3, $4, NOW())
         RETURNING id",
    )
    .bind(CUSTOM_FICHE)
    .bind(texte)
    .bind(rubrique)
    .bind(niveaurequis)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO reponse (question_id, evaluation_id, notechef) VALUES ($1, $2, NULL)")
        .bind(question_id)
        .bind(evaluation_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(question_id)
}
