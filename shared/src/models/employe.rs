//! Employe Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Employee row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employe {
    pub matriculesalarie: String,
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub direction: Option<String>,
    pub service: Option<String>,
    pub paye: Option<String>,
    pub sa_compteurnumero: Option<String>,
    pub miseensommeil: Option<String>,
    pub datesortieposte: Option<NaiveDate>,
    pub qualification: Option<String>,
    pub dateentree: Option<NaiveDate>,
    /// Matricule of the supervising chef (a `users` row)
    pub chefhierarchique: Option<String>,
    pub date_de_naissance: Option<NaiveDate>,
}

/// Employee as shown in the directory listing (`date_de_naissance` as `DD/MM/YYYY`)
#[derive(Debug, Clone, Serialize)]
pub struct EmployeListItem {
    pub matriculesalarie: String,
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub direction: Option<String>,
    pub service: Option<String>,
    pub paye: Option<String>,
    pub sa_compteurnumero: Option<String>,
    pub miseensommeil: Option<String>,
    pub datesortieposte: Option<NaiveDate>,
    pub qualification: Option<String>,
    pub dateentree: Option<NaiveDate>,
    pub chefhierarchique: Option<String>,
    #[serde(serialize_with = "serde_helpers::option_date_fr::serialize")]
    pub date_de_naissance: Option<NaiveDate>,
}

impl From<Employe> for EmployeListItem {
    fn from(e: Employe) -> Self {
        Self {
            matriculesalarie: e.matriculesalarie,
            prenom: e.prenom,
            nom: e.nom,
            direction: e.direction,
            service: e.service,
            paye: e.paye,
            sa_compteurnumero: e.sa_compteurnumero,
            miseensommeil: e.miseensommeil,
            datesortieposte: e.datesortieposte,
            qualification: e.qualification,
            dateentree: e.dateentree,
            chefhierarchique: e.chefhierarchique,
            date_de_naissance: e.date_de_naissance,
        }
    }
}

/// Employee not yet evaluated by their chef in the active campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ChefEmploye {
    pub matriculesalarie: String,
    pub nom: Option<String>,
    pub prenom: Option<String>,
}

/// Create / full-update payload, keyed by `matriculesalarie`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeInput {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub matriculesalarie: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub prenom: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub nom: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub direction: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub paye: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub sa_compteurnumero: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub miseensommeil: Option<String>,
    #[serde(default, with = "serde_helpers::flexible_date")]
    pub datesortieposte: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub qualification: Option<String>,
    #[serde(default, with = "serde_helpers::flexible_date")]
    pub dateentree: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub chefhierarchique: Option<String>,
    #[serde(default, with = "serde_helpers::flexible_date")]
    pub date_de_naissance: Option<NaiveDate>,
}
