//! Evaluation report data
//!
//! Everything the exported report needs in one document: the evaluation,
//! the employee, every answered question and per-rubrique averages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::employe::Employe;
use super::evaluation::{EvaluationEmployer, total_note};
use super::reponse::ReponseDetail;

/// Per-rubrique comparison of required level, chef and RH notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubriqueStats {
    pub rubrique: String,
    pub questions: usize,
    /// Average `niveaurequis`
    pub moyenne_requise: f64,
    pub moyenne_chef: f64,
    pub moyenne_rh: f64,
    /// `moyenne_rh - moyenne_requise`
    pub ecart: f64,
}

/// `GET /api/rapports/{evaluation_id}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub evaluation: EvaluationEmployer,
    pub employe: Option<Employe>,
    pub total_chef: i64,
    pub total_rh: i64,
    pub lignes: Vec<ReponseDetail>,
    pub rubriques: Vec<RubriqueStats>,
}

impl EvaluationReport {
    pub fn new(
        evaluation: EvaluationEmployer,
        employe: Option<Employe>,
        lignes: Vec<ReponseDetail>,
    ) -> Self {
        let rubriques = rubrique_stats(&lignes);
        Self {
            evaluation,
            employe,
            total_chef: total_note(lignes.iter().map(|l| l.notechef)),
            total_rh: total_note(lignes.iter().map(|l| l.noterh)),
            lignes,
            rubriques,
        }
    }
}

#[derive(Default)]
struct Totals {
    count: usize,
    requis: i64,
    chef: i64,
    rh: i64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Averages per rubrique, sorted by rubrique name.
///
/// Missing notes and levels count as 0; answers without a rubrique are
/// left out. `ecart` is taken between the rounded averages.
pub fn rubrique_stats(lignes: &[ReponseDetail]) -> Vec<RubriqueStats> {
    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();
    for ligne in lignes {
        let Some(rubrique) = ligne.rubrique.as_deref().map(str::trim) else {
            continue;
        };
        if rubrique.is_empty() {
            continue;
        }
        let entry = groups.entry(rubrique).or_default();
        entry.count += 1;
        entry.requis += i64::from(ligne.niveaurequis.unwrap_or(0));
        entry.chef += i64::from(ligne.notechef.unwrap_or(0));
        entry.rh += i64::from(ligne.noterh.unwrap_or(0));
    }

    groups
        .into_iter()
        .map(|(rubrique, totals)| {
            let count = totals.count as f64;
            let moyenne_requise = round2(totals.requis as f64 / count);
            let moyenne_rh = round2(totals.rh as f64 / count);
            RubriqueStats {
                rubrique: rubrique.to_string(),
                questions: totals.count,
                moyenne_requise,
                moyenne_chef: round2(totals.chef as f64 / count),
                moyenne_rh,
                ecart: round2(moyenne_rh - moyenne_requise),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ligne(
        id: i64,
        rubrique: Option<&str>,
        requis: Option<i32>,
        chef: Option<i32>,
        rh: Option<i32>,
    ) -> ReponseDetail {
        ReponseDetail {
            id,
            question_id: id,
            question_texte: format!("Question {id}"),
            rubrique: rubrique.map(str::to_string),
            code: None,
            niveaurequis: requis,
            notechef: chef,
            noterh: rh,
        }
    }

    #[test]
    fn test_rubrique_stats_groups_and_sorts() {
        let lignes = vec![
            ligne(1, Some("Savoir-faire"), Some(3), Some(3), Some(4)),
            ligne(2, Some("Comportement"), Some(2), Some(2), Some(2)),
            ligne(3, Some("Savoir-faire"), Some(4), Some(4), None),
            ligne(4, None, Some(5), Some(5), Some(5)),
            ligne(5, Some("  "), Some(1), Some(1), Some(1)),
        ];
        let stats = rubrique_stats(&lignes);
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].rubrique, "Comportement");
        assert_eq!(stats[0].questions, 1);
        assert_eq!(stats[0].ecart, 0.0);

        assert_eq!(stats[1].rubrique, "Savoir-faire");
        assert_eq!(stats[1].questions, 2);
        assert_eq!(stats[1].moyenne_requise, 3.5);
        assert_eq!(stats[1].moyenne_chef, 3.5);
        assert_eq!(stats[1].moyenne_rh, 2.0);
        assert_eq!(stats[1].ecart, -1.5);
    }

    #[test]
    fn test_ecart_compares_rh_to_required_level() {
        // chef and RH agree, but both sit above the required level
        let lignes = vec![
            ligne(1, Some("Sécurité"), Some(2), Some(4), Some(4)),
            ligne(2, Some("Sécurité"), None, Some(3), Some(3)),
        ];
        let stats = rubrique_stats(&lignes);
        assert_eq!(stats[0].moyenne_requise, 1.0);
        assert_eq!(stats[0].moyenne_chef, 3.5);
        assert_eq!(stats[0].moyenne_rh, 3.5);
        assert_eq!(stats[0].ecart, 2.5);
    }

    #[test]
    fn test_rubrique_stats_rounds_to_two_decimals() {
        let lignes = vec![
            ligne(1, Some("Qualité"), Some(2), Some(1), Some(2)),
            ligne(2, Some("Qualité"), Some(1), Some(1), Some(2)),
            ligne(3, Some("Qualité"), Some(1), Some(2), Some(2)),
        ];
        let stats = rubrique_stats(&lignes);
        assert_eq!(stats[0].moyenne_requise, 1.33);
        assert_eq!(stats[0].moyenne_chef, 1.33);
        assert_eq!(stats[0].moyenne_rh, 2.0);
        assert_eq!(stats[0].ecart, 0.67);
    }

    #[test]
    fn test_report_totals() {
        let evaluation = EvaluationEmployer {
            id: 9,
            employer_id: "10452".into(),
            compagnie_id: Some(1),
            evaluation_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            note: 6,
            status: "Terminé".into(),
            valide: false,
        };
        let report = EvaluationReport::new(
            evaluation,
            None,
            vec![
                ligne(1, Some("A"), Some(2), Some(3), Some(2)),
                ligne(2, Some("B"), Some(3), None, Some(4)),
            ],
        );
        assert_eq!(report.total_chef, 3);
        assert_eq!(report.total_rh, 6);
        assert_eq!(report.rubriques.len(), 2);
        assert!(rubrique_stats(&[]).is_empty());
    }
}
