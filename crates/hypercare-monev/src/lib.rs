//! hypercare-monev
//!
//! Monitoring-and-evaluation (Monev) of nursing diagnoses: the reference
//! table of symptoms and coping abilities per diagnosis, the derived
//! recovery summary, and the per-session tracker that keeps both in sync.

mod diagnoses;
pub mod error;
pub mod knowledge;
pub mod summary;
pub mod tracker;

use hypercare_core::models::diagnosis::DiagnosisCode;

use knowledge::{Ability, Diagnosis, Symptom};

/// Reference data for `code`.
pub fn diagnosis(code: DiagnosisCode) -> &'static Diagnosis {
    match code {
        DiagnosisCode::HT => &diagnoses::hipertensi::DIAGNOSIS,
        DiagnosisCode::AS => &diagnoses::ansietas::DIAGNOSIS,
        DiagnosisCode::GCT => &diagnoses::citra_tubuh::DIAGNOSIS,
        DiagnosisCode::RBD => &diagnoses::risiko_bunuh_diri::DIAGNOSIS,
    }
}

/// Return all registered diagnoses.
pub fn all_diagnoses() -> Vec<&'static Diagnosis> {
    DiagnosisCode::ALL.into_iter().map(diagnosis).collect()
}

/// Look up a diagnosis by its wire code. Unknown codes give `None`.
pub fn get_diagnosis_details(code: &str) -> Option<&'static Diagnosis> {
    code.parse().ok().map(diagnosis)
}

/// Symptoms for a wire code, empty for unknown codes.
pub fn get_diagnosis_symptoms(code: &str) -> &'static [Symptom] {
    get_diagnosis_details(code)
        .map(|d| d.symptoms.as_slice())
        .unwrap_or_default()
}

/// Abilities for a wire code, empty for unknown codes.
pub fn get_diagnosis_abilities(code: &str) -> &'static [Ability] {
    get_diagnosis_details(code)
        .map(|d| d.abilities.as_slice())
        .unwrap_or_default()
}
