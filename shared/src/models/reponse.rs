//! Reponse Model (per-question answer of an evaluation)

use serde::{Deserialize, Serialize};

/// Chef note already saved on an in-progress evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReponseChef {
    pub question_id: i64,
    pub notechef: Option<i32>,
}

/// Answer joined with its question
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReponseDetail {
    pub id: i64,
    pub question_id: i64,
    pub question_texte: String,
    pub rubrique: Option<String>,
    pub code: Option<String>,
    /// Level the question expects
    pub niveaurequis: Option<i32>,
    pub notechef: Option<i32>,
    pub noterh: Option<i32>,
}
