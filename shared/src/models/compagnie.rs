//! Compagnie Model (evaluation campaign)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Evaluation campaign; at most one row has `status = true`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Compagnie {
    pub id: i64,
    pub date_debut: NaiveDate,
    /// Active flag
    pub status: bool,
}

/// `POST /api/compagnie` payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompagnieCreate {
    #[serde(default, with = "serde_helpers::flexible_date")]
    pub date_debut: Option<NaiveDate>,
}

/// `GET /api/compagnie/active` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompagnieActive {
    pub active: bool,
}
