use serde::Serialize;

use hypercare_core::models::phase::Phase;

/// Shape of the answer a variable expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    String,
    Number,
}

/// Screening area a variable belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreeningDomain {
    Biological,
    Psychological,
    BodyImage,
    Social,
}

/// One entry in the interview registry. Static data, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InterviewVariable {
    pub id: &'static str,
    pub phase: Phase,
    pub value_type: ValueType,
    pub domain: Option<ScreeningDomain>,
    /// Only asked once the suicidal-ideation gate was answered affirmatively.
    pub conditional: bool,
    /// Question the interviewer should put to the patient.
    pub prompt: &'static str,
}

impl InterviewVariable {
    pub(crate) const fn new(
        id: &'static str,
        phase: Phase,
        value_type: ValueType,
        prompt: &'static str,
    ) -> Self {
        Self {
            id,
            phase,
            value_type,
            domain: None,
            conditional: false,
            prompt,
        }
    }

    pub(crate) const fn in_domain(mut self, domain: ScreeningDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub(crate) const fn gated(mut self) -> Self {
        self.conditional = true;
        self
    }
}
