use shared::models::{
    AnswerInput, EvaluationEmployer, EvaluationHistoryItem, EvaluationListItem,
    EvaluationQuestion, EvaluationStatus,
};
use sqlx::{PgExecutor, PgPool};

use super::compagnies;

pub enum SubmitOutcome {
    NoActiveCompagnie,
    /// A "Terminé" evaluation already exists for the employee in the active campaign
    AlreadySubmitted,
    Saved(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhAction {
    /// Overwrite RH notes and recompute the total
    Revise,
    /// Same as `Revise`, then mark the evaluation validated
    Validate,
}

pub enum RhOutcome {
    /// No finished evaluation for this employee
    NotFound,
    /// None of the submitted questions belong to the evaluation
    NothingUpdated,
    Updated { total: i64 },
}

const LIST_COLUMNS: &str = "e.id, em.matriculesalarie AS matricule_employe, em.nom, em.prenom, \
    e.evaluation_date, e.note, e.valide, e.status, e.compagnie_id";

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<EvaluationEmployer>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, employer_id, compagnie_id, evaluation_date, note, status, valide
         FROM evaluation_employer WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Latest evaluation of the employee that is not "Terminé"
pub async fn latest_in_progress_id<'e, E>(
    executor: E,
    matricule: &str,
) -> Result<Option<i64>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        "SELECT id FROM evaluation_employer
         WHERE employer_id = $1 AND status <> 'Terminé'
         ORDER BY evaluation_date DESC, id DESC LIMIT 1",
    )
    .bind(matricule)
    .fetch_optional(executor)
    .await
}

/// Latest "Terminé" evaluation of the employee
pub async fn latest_completed_id<'e, E>(
    executor: E,
    matricule: &str,
) -> Result<Option<i64>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        "SELECT id FROM evaluation_employer
         WHERE employer_id = $1 AND status = 'Terminé'
         ORDER BY evaluation_date DESC, id DESC LIMIT 1",
    )
    .bind(matricule)
    .fetch_optional(executor)
    .await
}

/// Save a chef's answers in one transaction.
///
/// Reuses the latest unfinished evaluation (its answers are replaced) or
/// opens a new one, attached to the active campaign. An employee gets one
/// evaluation per campaign: once it is "Terminé" no further submission is
/// accepted.
pub async fn submit_answers(
    pool: &PgPool,
    matricule: &str,
    answers: &[AnswerInput],
    status: EvaluationStatus,
    total: i64,
) -> Result<SubmitOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(compagnie_id) = compagnies::active_id(&mut *tx).await? else {
        return Ok(SubmitOutcome::NoActiveCompagnie);
    };

    let submitted: bool = sqlx::query_scalar(
        "SELECT EXISTS (
             SELECT 1 FROM evaluation_employer
             WHERE employer_id = $1 AND compagnie_id = $2 AND status = 'Terminé'
         )",
    )
    .bind(matricule)
    .bind(compagnie_id)
    .fetch_one(&mut *tx)
    .await?;
    if submitted {
        return Ok(SubmitOutcome::AlreadySubmitted);
    }

    let evaluation_id = match latest_in_progress_id(&mut *tx, matricule).await? {
        Some(id) => {
            sqlx::query("DELETE FROM reponse WHERE evaluation_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            sqlx::query(
                "UPDATE evaluation_employer SET note = $1, status = $2, compagnie_id = $3
                 WHERE id = $4",
            )
            .bind(total)
            .bind(status.as_str())
            .bind(compagnie_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
            id
        }
        None => {
            sqlx::query_scalar(
                "INSERT INTO evaluation_employer
                    (employer_id, evaluation_date, note, status, valide, compagnie_id)
                 VALUES ($1, CURRENT_DATE, $2, $3, FALSE, $4)
                 RETURNING id",
            )
            .bind(matricule)
            .bind(total)
            .bind(status.as_str())
            .bind(compagnie_id)
            .fetch_one(&mut *tx)
            .await?
        }
    };

    for answer in answers {
        sqlx::query("INSERT INTO reponse (question_id, notechef, evaluation_id) VALUES ($1, $2, $3)")
            .bind(answer.question_id)
            .bind(answer.note)
            .bind(evaluation_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(SubmitOutcome::Saved(evaluation_id))
}

/// Apply RH notes to the employee's latest finished evaluation and
/// recompute its total as the sum of RH notes (missing notes count as 0).
pub async fn apply_rh_notes(
    pool: &PgPool,
    matricule: &str,
    notes: &[(i64, Option<i32>)],
    action: RhAction,
) -> Result<RhOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(evaluation_id) = latest_completed_id(&mut *tx, matricule).await? else {
        return Ok(RhOutcome::NotFound);
    };

    let mut updated = 0;
    for (question_id, noterh) in notes {
        updated += sqlx::query(
            "UPDATE reponse SET noterh = $1 WHERE evaluation_id = $2 AND question_id = $3",
        )
        .bind(*noterh)
        .bind(evaluation_id)
        .bind(*question_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    if action == RhAction::Validate && updated == 0 {
        return Ok(RhOutcome::NothingUpdated);
    }

    let total: i64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(COALESCE(noterh, 0)), 0)::BIGINT FROM reponse WHERE evaluation_id = $1",
    )
    .bind(evaluation_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE evaluation_employer
         SET note = $1, valide = valide OR $2
         WHERE id = $3",
    )
    .bind(total)
    .bind(action == RhAction::Validate)
    .bind(evaluation_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(RhOutcome::Updated { total })
}

/// Finished, not yet validated evaluations of the active campaign
pub async fn list_completed_unvalidated(
    pool: &PgPool,
) -> Result<Vec<EvaluationListItem>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {LIST_COLUMNS}
         FROM evaluation_employer e
         JOIN employe em ON em.matriculesalarie = e.employer_id
         JOIN compagnie c ON c.id = e.compagnie_id
         WHERE NOT e.valide AND e.status = 'Terminé' AND c.status
         ORDER BY e.evaluation_date DESC, e.id DESC"
    ))
    .fetch_all(pool)
    .await
}

/// Finished evaluations of the active campaign, optionally limited to one chef's employees
pub async fn list_completed(
    pool: &PgPool,
    chef: Option<&str>,
) -> Result<Vec<EvaluationListItem>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {LIST_COLUMNS}
         FROM evaluation_employer e
         JOIN employe em ON em.matriculesalarie = e.employer_id
         JOIN compagnie c ON c.id = e.compagnie_id
         WHERE e.status = 'Terminé' AND c.status
           AND ($1::TEXT IS NULL OR em.chefhierarchique = $1)
         ORDER BY e.evaluation_date DESC, e.id DESC"
    ))
    .bind(chef)
    .fetch_all(pool)
    .await
}

/// Answers of the employee's evaluation in the active campaign
pub async fn questions_for_employe(
    pool: &PgPool,
    matricule: &str,
) -> Result<Vec<EvaluationQuestion>, sqlx::Error> {
    sqlx::query_as(
        "SELECT q.code, q.niveaurequis, q.rubrique, q.id, q.texte,
                r.notechef AS reponse_chef, r.noterh AS reponse_rh
         FROM reponse r
         JOIN question q ON q.id = r.question_id
         JOIN evaluation_employer e ON e.id = r.evaluation_id
         JOIN compagnie c ON c.id = e.compagnie_id
         WHERE e.employer_id = $1 AND c.status
         ORDER BY r.id",
    )
    .bind(matricule)
    .fetch_all(pool)
    .await
}

/// Every evaluation of the employee, newest campaign first
pub async fn history(
    pool: &PgPool,
    matricule: &str,
) -> Result<Vec<EvaluationHistoryItem>, sqlx::Error> {
    sqlx::query_as(
        "SELECT ev.id AS evaluation_id, ev.evaluation_date, ev.note, ev.status, ev.valide,
                c.id AS compagnie_id, c.date_debut AS compagnie_date
         FROM evaluation_employer ev
         JOIN compagnie c ON c.id = ev.compagnie_id
         WHERE ev.employer_id = $1
         ORDER BY c.date_debut DESC, c.id DESC",
    )
    .bind(matricule)
    .fetch_all(pool)
    .await
}
