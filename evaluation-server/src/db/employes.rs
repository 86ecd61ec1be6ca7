use shared::models::{ChefEmploye, Employe, EmployeInput};
use sqlx::PgPool;

const COLUMNS: &str = "matriculesalarie, prenom, nom, direction, service, paye, \
    sa_compteurnumero, miseensommeil, datesortieposte, qualification, dateentree, \
    chefhierarchique, date_de_naissance";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Employe>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM employe ORDER BY matriculesalarie"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find(pool: &PgPool, matricule: &str) -> Result<Option<Employe>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM employe WHERE matriculesalarie = $1"
    ))
    .bind(matricule)
    .fetch_optional(pool)
    .await
}

/// `None` when the employee does not exist, `Some(None)` when it has no chef
pub async fn chef_of(
    pool: &PgPool,
    matricule: &str,
) -> Result<Option<Option<String>>, sqlx::Error> {
    sqlx::query_scalar("SELECT chefhierarchique FROM employe WHERE matriculesalarie = $1")
        .bind(matricule)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    matricule: &str,
    input: &EmployeInput,
) -> Result<Employe, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO employe ({COLUMNS})
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
         RETURNING {COLUMNS}"
    ))
    .bind(matricule)
    .bind(&input.prenom)
    .bind(&input.nom)
    .bind(&input.direction)
    .bind(&input.service)
    .bind(&input.paye)
    .bind(&input.sa_compteurnumero)
    .bind(&input.miseensommeil)
    .bind(input.datesortieposte)
    .bind(&input.qualification)
    .bind(input.dateentree)
    .bind(&input.chefhierarchique)
    .bind(input.date_de_naissance)
    .fetch_one(pool)
    .await
}

/// Full-row update; returns the number of rows touched
pub async fn update(
    pool: &PgPool,
    matricule: &str,
    input: &EmployeInput,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE employe SET
            prenom = $2, nom = $3, direction = $4, service = $5, paye = $6,
            sa_compteurnumero = $7, miseensommeil = $8, datesortieposte = $9,
            qualification = $10, dateentree = $11, chefhierarchique = $12,
            date_de_naissance = $13
         WHERE matriculesalarie = $1",
    )
    .bind(matricule)
    .bind(&input.prenom)
    .bind(&input.nom)
    .bind(&input.direction)
    .bind(&input.service)
    .bind(&input.paye)
    .bind(&input.sa_compteurnumero)
    .bind(&input.miseensommeil)
    .bind(input.datesortieposte)
    .bind(&input.qualification)
    .bind(input.dateentree)
    .bind(&input.chefhierarchique)
    .bind(input.date_de_naissance)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, matricule: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employe WHERE matriculesalarie = $1")
        .bind(matricule)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// The chef's employees without a finished evaluation in the active campaign
pub async fn pending_for_chef(pool: &PgPool, chef: &str) -> Result<Vec<ChefEmploye>, sqlx::Error> {
    sqlx::query_as(
        "SELECT e.matriculesalarie, e.nom, e.prenom
         FROM employe e
         WHERE e.chefhierarchique = $1
           AND NOT EXISTS (
               SELECT 1 FROM evaluation_employer ev
               JOIN compagnie c ON c.id = ev.compagnie_id
               WHERE ev.employer_id = e.matriculesalarie
                 AND ev.status = 'Terminé'
                 AND c.status
           )
         ORDER BY e.nom, e.prenom",
    )
    .bind(chef)
    .fetch_all(pool)
    .await
}
