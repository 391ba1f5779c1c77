//! Derivations over captured interview answers.
//!
//! Nothing here holds state. Callers thread the map returned by
//! [`capture_variable`] into the next lookup.

use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

use hypercare_core::models::aski_state::CapturedVariables;
use hypercare_core::models::phase::Phase;

use crate::{SUICIDAL_IDEATION_GATE, get_variable, variables, variables_for_phase};

/// Completion of a phase (or of the whole interview).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PhaseProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

impl PhaseProgress {
    fn new(completed: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            completed,
            total,
            percentage,
        }
    }
}

/// Where an interview stands after applying the phase-advance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advance {
    pub phase: Phase,
    /// `None` once the interview has run out of questions in `closing`.
    pub current_variable: Option<&'static str>,
}

/// Phase members not yet captured, in declaration order.
pub fn get_unanswered_variables(phase: Phase, captured: &CapturedVariables) -> Vec<&'static str> {
    variables_for_phase(phase)
        .filter(|v| !captured.contains_key(v.id))
        .map(|v| v.id)
        .collect()
}

/// First unanswered variable of `phase`, or `None` once the phase is exhausted.
pub fn get_next_variable(phase: Phase, captured: &CapturedVariables) -> Option<&'static str> {
    variables_for_phase(phase)
        .find(|v| !captured.contains_key(v.id))
        .map(|v| v.id)
}

/// First unanswered variable of `phase` that should actually be asked,
/// skipping gated follow-ups that the gate answer rules out.
pub fn get_next_askable_variable(
    phase: Phase,
    captured: &CapturedVariables,
) -> Option<&'static str> {
    variables_for_phase(phase)
        .find(|v| should_ask_variable(v.id, captured))
        .map(|v| v.id)
}

/// "ya" or "iya", any case. Anything else, including booleans, is not a yes.
pub fn is_affirmative(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("ya") || s.eq_ignore_ascii_case("iya"))
}

/// Whether the suicidal-ideation gate holds an affirmative answer.
pub fn is_high_risk(captured: &CapturedVariables) -> bool {
    captured
        .get(SUICIDAL_IDEATION_GATE)
        .is_some_and(is_affirmative)
}

pub fn should_ask_variable(id: &str, captured: &CapturedVariables) -> bool {
    if captured.contains_key(id) {
        return false;
    }
    match get_variable(id) {
        Some(v) if v.conditional => is_high_risk(captured),
        _ => true,
    }
}

/// Return a copy of `captured` with `id` set to `value`.
pub fn capture_variable(id: &str, value: Value, captured: &CapturedVariables) -> CapturedVariables {
    let mut next = captured.clone();
    next.insert(id.to_string(), value);
    next
}

pub fn get_phase_progress(phase: Phase, captured: &CapturedVariables) -> PhaseProgress {
    let (completed, total) = variables_for_phase(phase).fold((0, 0), |(done, all), v| {
        (done + usize::from(captured.contains_key(v.id)), all + 1)
    });
    PhaseProgress::new(completed, total)
}

/// Progress for a phase given by name. Unknown names report zero progress.
pub fn phase_progress_by_name(name: &str, captured: &CapturedVariables) -> PhaseProgress {
    name.parse::<Phase>()
        .map(|phase| get_phase_progress(phase, captured))
        .unwrap_or_default()
}

pub fn is_phase_complete(phase: Phase, captured: &CapturedVariables) -> bool {
    let progress = get_phase_progress(phase, captured);
    progress.completed == progress.total
}

/// Progress across the whole registry.
pub fn overall_progress(captured: &CapturedVariables) -> PhaseProgress {
    let completed = variables()
        .iter()
        .filter(|v| captured.contains_key(v.id))
        .count();
    PhaseProgress::new(completed, variables().len())
}

/// Apply the phase-advance policy: stay in `phase` while it has something
/// to ask, otherwise walk forward through the fixed phase order. At
/// `closing` the interview stays put with no current variable.
pub fn advance(phase: Phase, captured: &CapturedVariables) -> Advance {
    let mut phase = phase;
    loop {
        if let Some(next) = get_next_askable_variable(phase, captured) {
            return Advance {
                phase,
                current_variable: Some(next),
            };
        }
        match phase.next() {
            Some(following) => phase = following,
            None => {
                return Advance {
                    phase,
                    current_variable: None,
                };
            }
        }
    }
}
