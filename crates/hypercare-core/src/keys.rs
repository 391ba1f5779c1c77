//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of objects in
//! the HyperCare bucket. Every caller-supplied segment is checked so a
//! user or conversation id can never escape its prefix.

use crate::error::CoreError;
use crate::models::diagnosis::DiagnosisCode;

pub const ASKI_PREFIX: &str = "aski/";
pub const MONEV_PREFIX: &str = "monev/";

/// Accept only `[A-Za-z0-9_-]`, non-empty, at most 128 bytes.
pub fn validate_segment(segment: &str) -> Result<&str, CoreError> {
    let valid = !segment.is_empty()
        && segment.len() <= 128
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(segment)
    } else {
        Err(CoreError::InvalidKeySegment(segment.to_string()))
    }
}

/// Aski assessment-state row for one (user, conversation).
pub fn assessment_state(user_id: &str, conversation_id: &str) -> Result<String, CoreError> {
    Ok(format!(
        "{ASKI_PREFIX}{}/{}.json",
        validate_segment(user_id)?,
        validate_segment(conversation_id)?
    ))
}

pub fn monev_session_prefix(session_id: &str) -> Result<String, CoreError> {
    Ok(format!("{MONEV_PREFIX}{}/", validate_segment(session_id)?))
}

/// Monev assessment snapshot for one diagnosis within a session.
pub fn monev_assessment(session_id: &str, code: DiagnosisCode) -> Result<String, CoreError> {
    Ok(format!("{}{}.json", monev_session_prefix(session_id)?, code.as_str()))
}
