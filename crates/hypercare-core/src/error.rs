use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown interview phase: {0}")]
    InvalidPhase(String),

    #[error("unknown diagnosis code: {0}")]
    InvalidDiagnosisCode(String),

    #[error("invalid key segment: {0:?}")]
    InvalidKeySegment(String),
}
