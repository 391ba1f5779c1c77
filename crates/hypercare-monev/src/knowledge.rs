use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hypercare_core::models::diagnosis::DiagnosisCode;

use crate::error::MonevError;

/// Whether an ability is something to understand or something to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AbilityCategory {
    Knowledge,
    Practice,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub label: String,
}

/// A coping ability taught for a diagnosis. Assessments refer to abilities
/// by `name`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub category: AbilityCategory,
}

/// Reference data for one nursing diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub code: DiagnosisCode,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<Symptom>,
    pub abilities: Vec<Ability>,
}

impl Diagnosis {
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name == name)
    }

    pub fn require_symptom(&self, id: &str) -> Result<&Symptom, MonevError> {
        self.symptom(id).ok_or_else(|| MonevError::UnknownSymptom {
            code: self.code,
            symptom_id: id.to_string(),
        })
    }

    pub fn require_ability(&self, name: &str) -> Result<&Ability, MonevError> {
        self.ability(name).ok_or_else(|| MonevError::UnknownAbility {
            code: self.code,
            ability: name.to_string(),
        })
    }
}

pub(crate) fn symptoms(prefix: &str, items: &[(&str, &str)]) -> Vec<Symptom> {
    items
        .iter()
        .map(|(id, label)| Symptom {
            id: format!("{prefix}_{id}"),
            label: label.to_string(),
        })
        .collect()
}

pub(crate) fn abilities(prefix: &str, items: &[(&str, &str, AbilityCategory)]) -> Vec<Ability> {
    items
        .iter()
        .map(|(id, name, category)| Ability {
            id: format!("{prefix}_{id}"),
            name: name.to_string(),
            category: *category,
        })
        .collect()
}
