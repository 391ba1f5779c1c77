use thiserror::Error;

use hypercare_core::models::diagnosis::DiagnosisCode;

#[derive(Debug, Error)]
pub enum MonevError {
    #[error(transparent)]
    Core(#[from] hypercare_core::error::CoreError),

    #[error("unknown symptom '{symptom_id}' for diagnosis '{code}'")]
    UnknownSymptom {
        code: DiagnosisCode,
        symptom_id: String,
    },

    #[error("unknown ability '{ability}' for diagnosis '{code}'")]
    UnknownAbility { code: DiagnosisCode, ability: String },
}
