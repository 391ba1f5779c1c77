use std::collections::HashSet;

use hypercare_core::models::diagnosis::DiagnosisCode;
use hypercare_monev::knowledge::AbilityCategory;
use hypercare_monev::{
    all_diagnoses, diagnosis, get_diagnosis_abilities, get_diagnosis_details,
    get_diagnosis_symptoms,
};

#[test]
fn four_diagnoses_in_code_order() {
    let codes: Vec<_> = all_diagnoses().iter().map(|d| d.code).collect();
    assert_eq!(codes, DiagnosisCode::ALL);
}

#[test]
fn hypertension_has_seven_symptoms() {
    assert_eq!(get_diagnosis_symptoms("HT").len(), 7);
}

#[test]
fn lookups_by_wire_code_match_typed_lookup() {
    for code in DiagnosisCode::ALL {
        let details = get_diagnosis_details(code.as_str()).unwrap();
        assert_eq!(details.code, code);
        assert_eq!(details.name, diagnosis(code).name);
        assert_eq!(
            get_diagnosis_abilities(code.as_str()).len(),
            diagnosis(code).abilities.len()
        );
    }
}

#[test]
fn unknown_code_degrades_to_empty() {
    assert!(get_diagnosis_details("XYZ").is_none());
    assert!(get_diagnosis_symptoms("ht").is_empty());
    assert!(get_diagnosis_abilities("").is_empty());
}

#[test]
fn ids_and_names_are_unique_within_each_diagnosis() {
    for d in all_diagnoses() {
        let symptom_ids: HashSet<_> = d.symptoms.iter().map(|s| &s.id).collect();
        let ability_names: HashSet<_> = d.abilities.iter().map(|a| &a.name).collect();
        assert_eq!(symptom_ids.len(), d.symptoms.len(), "{}", d.code);
        assert_eq!(ability_names.len(), d.abilities.len(), "{}", d.code);
        assert!(!d.symptoms.is_empty());
    }
}

#[test]
fn every_diagnosis_teaches_knowledge_before_practice() {
    for d in all_diagnoses() {
        let first = d.abilities.first().unwrap();
        assert_eq!(first.category, AbilityCategory::Knowledge, "{}", d.code);
        assert!(
            d.abilities
                .iter()
                .any(|a| a.category == AbilityCategory::Practice)
        );
    }
}

#[test]
fn require_helpers_reject_foreign_entries() {
    let ht = diagnosis(DiagnosisCode::HT);
    assert!(ht.require_symptom("ht_pusing").is_ok());
    assert!(ht.require_symptom("as_gelisah").is_err());
    let err = ht.require_ability("Melakukan hipnosis lima jari").unwrap_err();
    assert!(err.to_string().contains("HT"));
}
