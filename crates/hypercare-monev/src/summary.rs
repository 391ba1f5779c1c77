//! Recovery summary and next-ability recommendation.

use std::collections::HashSet;

use hypercare_core::models::diagnosis::DiagnosisCode;
use hypercare_core::models::monev::{MonevAssessment, MonevSummary};

use crate::diagnosis;
use crate::knowledge::Diagnosis;

fn distinct<S: AsRef<str>>(items: &[S]) -> usize {
    items.iter().map(|s| s.as_ref()).collect::<HashSet<&str>>().len()
}

/// Number of distinct endorsed symptoms.
pub fn calculate_symptom_count<S: AsRef<str>>(selected_ids: &[S]) -> usize {
    distinct(selected_ids)
}

/// Abilities known but not yet practised, in `known`'s order.
pub fn calculate_ability_gaps<S: AsRef<str>>(known: &[S], practiced: &[S]) -> Vec<String> {
    known
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !practiced.iter().any(|p| p.as_ref() == *k))
        .map(str::to_string)
        .collect()
}

/// Share of the diagnosis' symptoms no longer endorsed. 0 when the
/// diagnosis has no symptoms at all.
pub fn recovery_percentage(symptom_count: usize, total_symptoms: usize) -> u32 {
    if total_symptoms == 0 {
        return 0;
    }
    let remaining = total_symptoms.saturating_sub(symptom_count);
    (remaining as f64 / total_symptoms as f64 * 100.0).round() as u32
}

impl Diagnosis {
    pub fn summarize<S: AsRef<str>>(
        &self,
        selected_symptom_ids: &[S],
        known: &[S],
        practiced: &[S],
    ) -> MonevSummary {
        let symptom_count = calculate_symptom_count(selected_symptom_ids);
        let total_symptoms = self.symptoms.len();
        MonevSummary {
            diagnosis_code: self.code,
            symptom_count,
            total_symptoms,
            abilities_known_count: distinct(known),
            abilities_practiced_count: distinct(practiced),
            ability_gaps: calculate_ability_gaps(known, practiced),
            recovery_percentage: recovery_percentage(symptom_count, total_symptoms),
            next_recommended_ability: self.recommend_next_ability(known, practiced),
        }
    }

    /// The ability to work on next.
    ///
    /// Known-but-unpractised abilities come first, earliest in this
    /// diagnosis' declaration order. Otherwise the first ability not yet
    /// known. `None` once everything is known and practised.
    pub fn recommend_next_ability<S: AsRef<str>>(
        &self,
        known: &[S],
        practiced: &[S],
    ) -> Option<String> {
        let gaps = calculate_ability_gaps(known, practiced);
        if !gaps.is_empty() {
            let declared = self
                .abilities
                .iter()
                .find(|a| gaps.contains(&a.name))
                .map(|a| a.name.clone());
            return declared.or_else(|| gaps.into_iter().next());
        }
        self.abilities
            .iter()
            .find(|a| !known.iter().any(|k| k.as_ref() == a.name))
            .map(|a| a.name.clone())
    }
}

pub fn get_assessment_summary<S: AsRef<str>>(
    code: DiagnosisCode,
    selected_symptom_ids: &[S],
    known: &[S],
    practiced: &[S],
) -> MonevSummary {
    diagnosis(code).summarize(selected_symptom_ids, known, practiced)
}

pub fn recommend_next_ability<S: AsRef<str>>(
    code: DiagnosisCode,
    known: &[S],
    practiced: &[S],
) -> Option<String> {
    diagnosis(code).recommend_next_ability(known, practiced)
}

/// Summary of a stored assessment.
pub fn summarize_assessment(assessment: &MonevAssessment) -> MonevSummary {
    get_assessment_summary(
        assessment.diagnosis_code,
        &assessment.selected_symptom_ids,
        &assessment.abilities_known,
        &assessment.abilities_practiced,
    )
}
