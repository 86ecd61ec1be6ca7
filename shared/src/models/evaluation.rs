//! Evaluation workflow models
//!
//! A chef fills an evaluation (`En cours` while saving drafts, `Terminé`
//! once submitted); RH then revises the per-question notes and validates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_helpers;
use crate::error::{AppError, ErrorCode};

/// Evaluation status as stored in `evaluation_employer.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationStatus {
    #[serde(rename = "En cours")]
    EnCours,
    #[serde(rename = "Terminé")]
    Termine,
}

impl EvaluationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStatus::EnCours => "En cours",
            EvaluationStatus::Termine => "Terminé",
        }
    }

    /// Status requested by a submission: anything but `Terminé` saves a draft.
    pub fn requested(value: Option<&str>) -> Self {
        match value {
            Some("Terminé") => Self::Termine,
            _ => Self::EnCours,
        }
    }
}

/// `evaluation_employer` row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EvaluationEmployer {
    pub id: i64,
    /// Employee matricule (`employe.matriculesalarie`)
    pub employer_id: String,
    pub compagnie_id: Option<i64>,
    pub evaluation_date: NaiveDate,
    pub note: i64,
    pub status: String,
    pub valide: bool,
}

/// Evaluation joined with its employee, for the RH listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EvaluationListItem {
    pub id: i64,
    pub matricule_employe: String,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub evaluation_date: NaiveDate,
    pub note: i64,
    pub valide: bool,
    pub status: String,
    pub compagnie_id: Option<i64>,
}

/// One line of an employee's evaluation history
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EvaluationHistoryItem {
    pub evaluation_id: i64,
    pub evaluation_date: NaiveDate,
    pub note: i64,
    pub status: String,
    pub valide: bool,
    pub compagnie_id: i64,
    #[serde(serialize_with = "serde_helpers::date_fr::serialize")]
    pub compagnie_date: NaiveDate,
}

/// Answered question of an employee's evaluation in the active campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EvaluationQuestion {
    pub code: Option<String>,
    pub niveaurequis: Option<i32>,
    pub rubrique: Option<String>,
    pub id: i64,
    pub texte: String,
    pub reponse_chef: Option<i32>,
    pub reponse_rh: Option<i32>,
}

/// One answer of a chef submission
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub matricule_employe: Option<String>,
    pub question_id: i64,
    #[serde(default, deserialize_with = "serde_helpers::opt_i32")]
    pub note: Option<i32>,
}

/// `POST /api/evaluation_answers` payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerSubmission {
    #[serde(default)]
    pub evaluations: Vec<AnswerInput>,
    #[serde(default)]
    pub status: Option<String>,
}

impl AnswerSubmission {
    /// Matricule shared by every answer.
    pub fn matricule(&self) -> Result<&str, AppError> {
        let first = self
            .evaluations
            .first()
            .ok_or_else(|| AppError::new(ErrorCode::EvaluationEmpty))?;
        let matricule = first.matricule_employe.as_deref().ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidMatricule, "Matricule employé manquant.")
        })?;
        if self
            .evaluations
            .iter()
            .any(|a| a.matricule_employe.as_deref() != Some(matricule))
        {
            return Err(AppError::new(ErrorCode::MixedMatricules));
        }
        Ok(matricule)
    }

    /// Sum of the chef notes, missing notes counting as 0
    pub fn total_note(&self) -> i64 {
        total_note(self.evaluations.iter().map(|a| a.note))
    }

    pub fn requested_status(&self) -> EvaluationStatus {
        EvaluationStatus::requested(self.status.as_deref())
    }
}

/// `?matricule=` query of the per-employee evaluation routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatriculeQuery {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub matricule: Option<String>,
}

/// `GET /api/evaluations/terminer` filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletedQuery {
    #[serde(rename = "matriculeChef", default, deserialize_with = "serde_helpers::opt_string")]
    pub matricule_chef: Option<String>,
}

/// `POST /api/evaluation_answers` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub message: String,
    pub evaluation_id: i64,
}

/// RH revision payload: `{ "modifications": { "<question_id>": noterh } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RhRevision {
    #[serde(default)]
    pub modifications: Option<Value>,
}

impl RhRevision {
    /// Parsed `(question_id, noterh)` pairs.
    pub fn parse(&self) -> Result<Vec<(i64, Option<i32>)>, AppError> {
        parse_modifications(self.modifications.as_ref())
    }
}

/// `PUT /api/evaluations/{matricule}/update` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionResult {
    pub message: String,
    pub total_note: i64,
}

/// `POST /api/evaluations/{matricule}/valider` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub success: bool,
    pub message: String,
    pub total_note: i64,
}

/// Sum of notes where a missing note counts as 0
pub fn total_note(notes: impl IntoIterator<Item = Option<i32>>) -> i64 {
    notes.into_iter().map(|n| i64::from(n.unwrap_or(0))).sum()
}

/// Validate an RH modifications map.
///
/// Keys must be question ids; values are integer notes, numeric strings or
/// `null` (clears the RH note).
pub fn parse_modifications(value: Option<&Value>) -> Result<Vec<(i64, Option<i32>)>, AppError> {
    let invalid = || AppError::new(ErrorCode::InvalidModifications);
    let map = value.and_then(Value::as_object).ok_or_else(invalid)?;

    map.iter()
        .map(|(key, note)| {
            let question_id: i64 = key.trim().parse().map_err(|_| {
                AppError::new(ErrorCode::InvalidModifications).with_detail("question_id", key.as_str())
            })?;
            let note = match note {
                Value::Null => None,
                Value::Number(n) => Some(
                    n.as_i64()
                        .and_then(|n| i32::try_from(n).ok())
                        .ok_or_else(invalid)?,
                ),
                Value::String(s) if s.trim().is_empty() => None,
                Value::String(s) => Some(s.trim().parse().map_err(|_| invalid())?),
                _ => return Err(invalid()),
            };
            Ok((question_id, note))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: Value) -> AnswerSubmission {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_requested_status() {
        assert_eq!(
            EvaluationStatus::requested(Some("Terminé")),
            EvaluationStatus::Termine
        );
        assert_eq!(
            EvaluationStatus::requested(Some("terminé")),
            EvaluationStatus::EnCours
        );
        assert_eq!(EvaluationStatus::requested(None), EvaluationStatus::EnCours);
        assert_eq!(EvaluationStatus::Termine.as_str(), "Terminé");
    }

    #[test]
    fn test_submission_total_and_matricule() {
        let sub = submission(json!({
            "status": "Terminé",
            "evaluations": [
                {"matricule_employe": "10452", "question_id": 1, "note": 3},
                {"matricule_employe": 10452, "question_id": 2, "note": "4"},
                {"matricule_employe": "10452", "question_id": 3, "note": null}
            ]
        }));
        assert_eq!(sub.matricule().unwrap(), "10452");
        assert_eq!(sub.total_note(), 7);
        assert_eq!(sub.requested_status(), EvaluationStatus::Termine);
    }

    #[test]
    fn test_submission_rejections() {
        let empty = submission(json!({"evaluations": []}));
        assert_eq!(
            empty.matricule().unwrap_err().code,
            ErrorCode::EvaluationEmpty
        );

        let no_matricule = submission(json!({"evaluations": [{"question_id": 1, "note": 2}]}));
        let err = no_matricule.matricule().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMatricule);
        assert_eq!(err.message, "Matricule employé manquant.");

        let mixed = submission(json!({"evaluations": [
            {"matricule_employe": "1", "question_id": 1, "note": 2},
            {"matricule_employe": "2", "question_id": 2, "note": 2}
        ]}));
        assert_eq!(
            mixed.matricule().unwrap_err().code,
            ErrorCode::MixedMatricules
        );
    }

    #[test]
    fn test_parse_modifications() {
        let mut parsed =
            parse_modifications(Some(&json!({"12": 4, "7": "3", "9": null, "10": ""}))).unwrap();
        parsed.sort();
        assert_eq!(parsed, vec![(7, Some(3)), (9, None), (10, None), (12, Some(4))]);
    }

    #[test]
    fn test_parse_modifications_invalid() {
        for bad in [
            None,
            Some(json!([1, 2])),
            Some(json!("4")),
            Some(json!({"abc": 3})),
            Some(json!({"3": 2.5})),
            Some(json!({"3": {"note": 1}})),
        ] {
            let err = parse_modifications(bad.as_ref()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidModifications);
        }
    }

    #[test]
    fn test_result_field_names() {
        let json = serde_json::to_value(SubmissionResult {
            message: "ok".into(),
            evaluation_id: 5,
        })
        .unwrap();
        assert_eq!(json["evaluationId"], 5);

        let json = serde_json::to_value(ValidationResult {
            success: true,
            message: "ok".into(),
            total_note: 12,
        })
        .unwrap();
        assert_eq!(json["totalNote"], 12);
    }

    #[test]
    fn test_history_renders_campaign_date_fr() {
        let item = EvaluationHistoryItem {
            evaluation_id: 3,
            evaluation_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            note: 40,
            status: "Terminé".into(),
            valide: true,
            compagnie_id: 2,
            compagnie_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        };
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json["compagnie_date"], "15/05/2024");
        assert_eq!(json["evaluation_date"], "2024-06-02");
    }
}
