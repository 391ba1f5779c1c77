use std::collections::HashSet;

use hypercare_aski::variable::ScreeningDomain;
use hypercare_aski::{get_variable, variables, variables_for_phase};
use hypercare_core::models::phase::Phase;

#[test]
fn registry_has_forty_five_unique_ids() {
    let ids: HashSet<_> = variables().iter().map(|v| v.id).collect();
    assert_eq!(variables().len(), 45);
    assert_eq!(ids.len(), 45);
}

#[test]
fn registry_is_ordered_by_phase() {
    let phases: Vec<Phase> = variables().iter().map(|v| v.phase).collect();
    let mut sorted = phases.clone();
    sorted.sort();
    assert_eq!(phases, sorted);
}

#[test]
fn orientation_declares_eight_variables_starting_with_consent() {
    let ids: Vec<_> = variables_for_phase(Phase::Orientation).map(|v| v.id).collect();
    assert_eq!(
        ids,
        [
            "consent",
            "nama_pasien",
            "informed_consent",
            "usia",
            "tanggal_lahir",
            "jenis_kelamin",
            "pendidikan",
            "pekerjaan",
        ]
    );
}

#[test]
fn only_the_five_cssrs_follow_ups_are_conditional() {
    let gated: Vec<_> = variables()
        .iter()
        .filter(|v| v.conditional)
        .map(|v| (v.id, v.phase))
        .collect();
    assert_eq!(gated.len(), 5);
    assert!(gated.iter().all(|(_, phase)| *phase == Phase::Cssrs));
    assert!(gated.iter().any(|(id, _)| *id == "C_SSRS_Q3_method"));
    assert!(!get_variable("pikiran_bunuhdiri").unwrap().conditional);
}

#[test]
fn screening_variables_all_carry_a_domain() {
    let screening: Vec<_> = variables_for_phase(Phase::Screening).collect();
    assert!(screening.iter().all(|v| v.domain.is_some()));
    for domain in [
        ScreeningDomain::Biological,
        ScreeningDomain::Psychological,
        ScreeningDomain::BodyImage,
        ScreeningDomain::Social,
    ] {
        assert!(screening.iter().any(|v| v.domain == Some(domain)));
    }
    assert!(
        variables()
            .iter()
            .filter(|v| v.phase != Phase::Screening)
            .all(|v| v.domain.is_none())
    );
}

#[test]
fn domain_serializes_in_camel_case() {
    let json = serde_json::to_value(get_variable("persepsi_tubuh").unwrap()).unwrap();
    assert_eq!(json["domain"], "bodyImage");
    assert_eq!(json["phase"], "screening");
    assert_eq!(json["value_type"], "string");
}

#[test]
fn unknown_variable_is_absent() {
    assert!(get_variable("golongan_darah").is_none());
}
