//! hypercare-aski
//!
//! Aski clinical-interview variable registry and phase progression.
//! Pure data and pure functions: the registry is fixed at compile time and
//! every derivation takes the captured answers as an argument.

pub mod error;
mod phases;
pub mod tracker;
pub mod variable;

use std::sync::LazyLock;

use hypercare_core::models::phase::Phase;

use variable::InterviewVariable;

pub use phases::cssrs::SUICIDAL_IDEATION_GATE;

static REGISTRY: LazyLock<Vec<InterviewVariable>> = LazyLock::new(|| {
    Phase::ALL
        .into_iter()
        .flat_map(|phase| phase_table(phase).iter().copied())
        .collect()
});

fn phase_table(phase: Phase) -> &'static [InterviewVariable] {
    match phase {
        Phase::Orientation => phases::orientation::VARIABLES,
        Phase::Interaksi => phases::interaksi::VARIABLES,
        Phase::Screening => phases::screening::VARIABLES,
        Phase::Cssrs => phases::cssrs::VARIABLES,
        Phase::Insight => phases::insight::VARIABLES,
        Phase::Closing => phases::closing::VARIABLES,
    }
}

/// Every interview variable in declaration order.
pub fn variables() -> &'static [InterviewVariable] {
    &REGISTRY
}

/// Look up a variable by id.
pub fn get_variable(id: &str) -> Option<&'static InterviewVariable> {
    variables().iter().find(|v| v.id == id)
}

/// Variables owned by `phase`, in declaration order.
pub fn variables_for_phase(phase: Phase) -> impl Iterator<Item = &'static InterviewVariable> {
    variables().iter().filter(move |v| v.phase == phase)
}
