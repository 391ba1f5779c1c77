use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::phase::Phase;

/// Variable id → captured answer for one conversation. Keys are only ever
/// added; a captured variable is never asked again.
pub type CapturedVariables = serde_json::Map<String, serde_json::Value>;

/// Persisted Aski interview state for one (user, conversation).
///
/// `current_phase` stays a plain string because rows may be written by
/// other clients; parse it with [`AssessmentStateRow::phase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentStateRow {
    pub user_id: String,
    pub conversation_id: String,
    pub current_phase: String,
    #[serde(default)]
    #[ts(type = "Record<string, unknown>")]
    pub captured_variables: CapturedVariables,
    pub current_variable: Option<String>,
    #[serde(default)]
    pub is_high_risk: bool,
    #[serde(default)]
    pub safety_acknowledged: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentStateRow {
    /// A fresh row at the start of orientation with nothing captured.
    pub fn new(user_id: &str, conversation_id: &str, now: jiff::Timestamp) -> Self {
        Self {
            user_id: user_id.to_string(),
            conversation_id: conversation_id.to_string(),
            current_phase: Phase::Orientation.as_str().to_string(),
            captured_variables: CapturedVariables::new(),
            current_variable: None,
            is_high_risk: false,
            safety_acknowledged: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The stored phase, or `None` if the row holds an unrecognised name.
    pub fn phase(&self) -> Option<Phase> {
        self.current_phase.parse().ok()
    }
}
