use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::diagnosis::DiagnosisCode;

/// Free-text notes on how an ability is being practised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeDetail {
    pub frequency: String,
    pub benefit: String,
    pub challenges: String,
}

/// Monitoring-and-evaluation record for one diagnosis within a session.
///
/// The id lists keep insertion order. `abilities_practiced` is expected to
/// be a subset of `abilities_known` but nothing enforces it: un-knowing an
/// ability leaves its practised mark in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonevAssessment {
    pub diagnosis_code: DiagnosisCode,
    #[serde(default)]
    pub selected_symptom_ids: Vec<String>,
    #[serde(default)]
    pub abilities_known: Vec<String>,
    #[serde(default)]
    pub abilities_practiced: Vec<String>,
    #[serde(default)]
    pub practice_details: BTreeMap<String, PracticeDetail>,
}

impl MonevAssessment {
    pub fn new(diagnosis_code: DiagnosisCode) -> Self {
        Self {
            diagnosis_code,
            selected_symptom_ids: Vec::new(),
            abilities_known: Vec::new(),
            abilities_practiced: Vec::new(),
            practice_details: BTreeMap::new(),
        }
    }
}

/// Derived view over a [`MonevAssessment`]. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonevSummary {
    pub diagnosis_code: DiagnosisCode,
    pub symptom_count: usize,
    pub total_symptoms: usize,
    pub abilities_known_count: usize,
    pub abilities_practiced_count: usize,
    pub ability_gaps: Vec<String>,
    pub recovery_percentage: u32,
    pub next_recommended_ability: Option<String>,
}
