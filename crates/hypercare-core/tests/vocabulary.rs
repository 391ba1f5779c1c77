use hypercare_core::keys;
use hypercare_core::models::aski_state::AssessmentStateRow;
use hypercare_core::models::diagnosis::DiagnosisCode;
use hypercare_core::models::phase::Phase;

#[test]
fn phases_advance_in_fixed_order() {
    assert_eq!(Phase::Orientation.next(), Some(Phase::Interaksi));
    assert_eq!(Phase::Cssrs.next(), Some(Phase::Insight));
    assert_eq!(Phase::Closing.next(), None);
}

#[test]
fn phase_parses_wire_names_only() {
    assert_eq!("screening".parse::<Phase>().unwrap(), Phase::Screening);
    assert!("Screening".parse::<Phase>().is_err());
    assert!("triage".parse::<Phase>().is_err());
    assert_eq!(serde_json::to_string(&Phase::Cssrs).unwrap(), "\"cssrs\"");
}

#[test]
fn diagnosis_codes_round_trip_through_strings() {
    for code in DiagnosisCode::ALL {
        assert_eq!(code.as_str().parse::<DiagnosisCode>().unwrap(), code);
    }
    assert!("ht".parse::<DiagnosisCode>().is_err());
}

#[test]
fn new_row_starts_in_orientation() {
    let now = jiff::Timestamp::UNIX_EPOCH;
    let row = AssessmentStateRow::new("u1", "c1", now);
    assert_eq!(row.phase(), Some(Phase::Orientation));
    assert!(row.captured_variables.is_empty());
    assert!(row.current_variable.is_none());
    assert!(!row.is_high_risk);
}

#[test]
fn row_tolerates_missing_optional_flags() {
    let json = r#"{
        "user_id": "u1",
        "conversation_id": "c1",
        "current_phase": "bogus",
        "current_variable": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;
    let row: AssessmentStateRow = serde_json::from_str(json).unwrap();
    assert!(!row.safety_acknowledged);
    assert!(row.captured_variables.is_empty());
    assert_eq!(row.phase(), None);
}

#[test]
fn keys_follow_bucket_layout() {
    assert_eq!(
        keys::assessment_state("user-1", "conv_2").unwrap(),
        "aski/user-1/conv_2.json"
    );
    assert_eq!(
        keys::monev_assessment("s1", DiagnosisCode::GCT).unwrap(),
        "monev/s1/GCT.json"
    );
}

#[test]
fn keys_reject_path_escapes() {
    assert!(keys::assessment_state("../etc", "c").is_err());
    assert!(keys::assessment_state("u", "").is_err());
    assert!(keys::monev_session_prefix("a/b").is_err());
}
