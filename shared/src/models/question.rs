//! Question bank models
//!
//! Questions are grouped into fiches by `codefiche`. Fiche [`CUSTOM_FICHE`]
//! holds the per-employee questions a chef adds during an evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Fiche code reserved for custom per-employee questions
pub const CUSTOM_FICHE: &str = "11";

/// Question row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Question {
    pub id: i64,
    pub codefiche: String,
    pub code: Option<String>,
    pub profil: Option<String>,
    pub rubrique: Option<String>,
    pub texte: String,
    pub niveaurequis: Option<i32>,
    pub sousprocess: Option<String>,
    pub est_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// `POST /api/questions` / `PUT /api/questions/{id}` payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionInput {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub codefiche: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub profil: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub rubrique: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub texte: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_i32")]
    pub niveaurequis: Option<i32>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub sousprocess: Option<String>,
    #[serde(default)]
    pub est_active: Option<bool>,
}

impl QuestionInput {
    /// Names of the required fields left empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("codefiche", self.codefiche.is_none()),
            ("code", self.code.is_none()),
            ("profil", self.profil.is_none()),
            ("rubrique", self.rubrique.is_none()),
            ("texte", self.texte.is_none()),
            ("niveaurequis", self.niveaurequis.is_none()),
            ("sousprocess", self.sousprocess.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

/// Legacy `POST /Ajouter` payload (PascalCase keys)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyQuestionInput {
    #[serde(rename = "CodeFiche", default, deserialize_with = "serde_helpers::opt_string")]
    pub code_fiche: Option<String>,
    #[serde(rename = "Code", default, deserialize_with = "serde_helpers::opt_string")]
    pub code: Option<String>,
    #[serde(rename = "Profil", default, deserialize_with = "serde_helpers::opt_string")]
    pub profil: Option<String>,
    #[serde(rename = "Rubrique", default, deserialize_with = "serde_helpers::opt_string")]
    pub rubrique: Option<String>,
    #[serde(rename = "Text", default, deserialize_with = "serde_helpers::opt_string")]
    pub text: Option<String>,
    #[serde(rename = "NiveauRequis", default, deserialize_with = "serde_helpers::opt_i32")]
    pub niveau_requis: Option<i32>,
    #[serde(rename = "SousProcess", default, deserialize_with = "serde_helpers::opt_string")]
    pub sous_process: Option<String>,
    #[serde(rename = "Est_active", default)]
    pub est_active: Option<bool>,
}

impl From<LegacyQuestionInput> for QuestionInput {
    fn from(q: LegacyQuestionInput) -> Self {
        Self {
            codefiche: q.code_fiche,
            code: q.code,
            profil: q.profil,
            rubrique: q.rubrique,
            texte: q.text,
            niveaurequis: q.niveau_requis,
            sousprocess: q.sous_process,
            est_active: q.est_active,
        }
    }
}

/// `GET /api/questions?codeFiche=` query
#[derive(Debug, Clone, Deserialize)]
pub struct FicheQuery {
    #[serde(rename = "codeFiche")]
    pub code_fiche: Option<String>,
}

/// `POST /api/dupliquer-fiche` payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FicheDuplicate {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub source_codefiche: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub new_codefiche: Option<String>,
}

/// Custom question attached to an employee's in-progress evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomQuestion {
    pub id: i64,
    pub texte: String,
    pub rubrique: Option<String>,
    pub niveaurequis: Option<i32>,
}

/// `POST /api/question_personnalisee` payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomQuestionCreate {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub texte: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_i32")]
    pub niveaurequis: Option<i32>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub matricule_employe: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub rubrique: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_input_missing_fields() {
        let input: QuestionInput = serde_json::from_str(
            r#"{"codefiche": 4, "code": "C1", "texte": "Maîtrise des outils", "niveaurequis": "2"}"#,
        )
        .unwrap();
        assert_eq!(input.codefiche.as_deref(), Some("4"));
        assert_eq!(input.niveaurequis, Some(2));
        assert_eq!(
            input.missing_fields(),
            vec!["profil", "rubrique", "sousprocess"]
        );
    }

    #[test]
    fn test_legacy_payload_maps_to_input() {
        let legacy: LegacyQuestionInput = serde_json::from_str(
            r#"{
                "CodeFiche": "7", "Code": "Q7", "Profil": "Technicien",
                "Rubrique": "Sécurité", "Text": "Applique les consignes",
                "NiveauRequis": 3, "SousProcess": "Maintenance", "Est_active": false
            }"#,
        )
        .unwrap();
        let input = QuestionInput::from(legacy);
        assert!(input.missing_fields().is_empty());
        assert_eq!(input.texte.as_deref(), Some("Applique les consignes"));
        assert_eq!(input.est_active, Some(false));
    }

    #[test]
    fn test_fiche_duplicate_camel_case() {
        let dup: FicheDuplicate =
            serde_json::from_str(r#"{"sourceCodefiche": "4", "newCodefiche": 12}"#).unwrap();
        assert_eq!(dup.source_codefiche.as_deref(), Some("4"));
        assert_eq!(dup.new_codefiche.as_deref(), Some("12"));
    }
}
