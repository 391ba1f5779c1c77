use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Stage of an Aski clinical interview. Interviews move through the phases
/// strictly in [`Phase::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Phase {
    Orientation,
    Interaksi,
    Screening,
    Cssrs,
    Insight,
    Closing,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Orientation,
        Phase::Interaksi,
        Phase::Screening,
        Phase::Cssrs,
        Phase::Insight,
        Phase::Closing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Orientation => "orientation",
            Phase::Interaksi => "interaksi",
            Phase::Screening => "screening",
            Phase::Cssrs => "cssrs",
            Phase::Insight => "insight",
            Phase::Closing => "closing",
        }
    }

    /// The phase that follows this one, or `None` for `Closing`.
    pub fn next(self) -> Option<Phase> {
        let idx = Phase::ALL.iter().position(|p| *p == self)?;
        Phase::ALL.get(idx + 1).copied()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::InvalidPhase(s.to_string()))
    }
}
