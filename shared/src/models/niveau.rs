//! Niveau Model

use serde::{Deserialize, Serialize};

/// Proficiency level offered in the questionnaire forms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Niveau {
    pub id: i32,
    pub niveau: Option<String>,
}
