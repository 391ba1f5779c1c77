//! Session-scoped Monev state.
//!
//! One [`MonevAssessment`] per diagnosis code plus a cached
//! [`MonevSummary`] that every toggle refreshes before returning. Keying by
//! user or conversation is the owner's job; the HTTP layer rebuilds a
//! tracker from the stored snapshot on every request.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use hypercare_core::models::diagnosis::DiagnosisCode;
use hypercare_core::models::monev::{MonevAssessment, MonevSummary, PracticeDetail};

use crate::summary::summarize_assessment;

#[derive(Debug, Clone, Default)]
pub struct MonevTracker {
    assessments: BTreeMap<DiagnosisCode, MonevAssessment>,
    summaries: BTreeMap<DiagnosisCode, MonevSummary>,
}

fn toggle(list: &mut Vec<String>, item: &str) {
    match list.iter().position(|x| x == item) {
        Some(pos) => {
            list.remove(pos);
        }
        None => list.push(item.to_string()),
    }
}

impl MonevTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, code: DiagnosisCode) -> &mut MonevAssessment {
        self.assessments
            .entry(code)
            .or_insert_with(|| MonevAssessment::new(code))
    }

    fn recompute(&mut self, code: DiagnosisCode) -> &MonevSummary {
        let summary = summarize_assessment(self.entry(code));
        match self.summaries.entry(code) {
            Entry::Occupied(mut slot) => {
                slot.insert(summary);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(summary),
        }
    }

    pub fn toggle_symptom(&mut self, code: DiagnosisCode, symptom_id: &str) -> &MonevSummary {
        toggle(&mut self.entry(code).selected_symptom_ids, symptom_id);
        self.recompute(code)
    }

    /// Un-knowing an ability does not clear its practised mark.
    pub fn toggle_ability_known(&mut self, code: DiagnosisCode, ability: &str) -> &MonevSummary {
        toggle(&mut self.entry(code).abilities_known, ability);
        self.recompute(code)
    }

    pub fn toggle_ability_practiced(
        &mut self,
        code: DiagnosisCode,
        ability: &str,
    ) -> &MonevSummary {
        toggle(&mut self.entry(code).abilities_practiced, ability);
        self.recompute(code)
    }

    /// Upsert free-text notes. The summary does not depend on them and is
    /// left as is.
    pub fn update_practice_details(
        &mut self,
        code: DiagnosisCode,
        ability: &str,
        detail: PracticeDetail,
    ) {
        self.entry(code)
            .practice_details
            .insert(ability.to_string(), detail);
    }

    pub fn get_assessment(&self, code: DiagnosisCode) -> Option<&MonevAssessment> {
        self.assessments.get(&code)
    }

    pub fn get_summary(&self, code: DiagnosisCode) -> Option<&MonevSummary> {
        self.summaries.get(&code)
    }

    /// Drop both the assessment and its cached summary.
    pub fn clear_assessment(&mut self, code: DiagnosisCode) {
        self.assessments.remove(&code);
        self.summaries.remove(&code);
    }

    /// Owned copy of the current record, for handing to a persistence callback.
    pub fn snapshot(&self, code: DiagnosisCode) -> Option<MonevAssessment> {
        self.assessments.get(&code).cloned()
    }

    /// Load a previously saved record, replacing any in-memory state for
    /// its diagnosis.
    pub fn restore(&mut self, assessment: MonevAssessment) -> &MonevSummary {
        let code = assessment.diagnosis_code;
        self.assessments.insert(code, assessment);
        self.recompute(code)
    }

    pub fn assessments(&self) -> impl Iterator<Item = &MonevAssessment> {
        self.assessments.values()
    }
}
