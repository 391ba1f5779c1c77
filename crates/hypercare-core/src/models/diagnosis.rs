use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Nursing diagnoses tracked by Monev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DiagnosisCode {
    /// Hipertensi
    HT,
    /// Ansietas
    AS,
    /// Gangguan Citra Tubuh
    GCT,
    /// Risiko Bunuh Diri
    RBD,
}

impl DiagnosisCode {
    pub const ALL: [DiagnosisCode; 4] = [
        DiagnosisCode::HT,
        DiagnosisCode::AS,
        DiagnosisCode::GCT,
        DiagnosisCode::RBD,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosisCode::HT => "HT",
            DiagnosisCode::AS => "AS",
            DiagnosisCode::GCT => "GCT",
            DiagnosisCode::RBD => "RBD",
        }
    }
}

impl fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosisCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagnosisCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidDiagnosisCode(s.to_string()))
    }
}
