use serde_json::{Value, json};

use hypercare_aski::tracker::{
    PhaseProgress, advance, capture_variable, get_next_askable_variable, get_next_variable,
    get_phase_progress, get_unanswered_variables, is_affirmative, is_high_risk, is_phase_complete,
    overall_progress, phase_progress_by_name, should_ask_variable,
};
use hypercare_aski::variables;
use hypercare_core::models::aski_state::CapturedVariables;
use hypercare_core::models::phase::Phase;

fn captured(pairs: &[(&str, Value)]) -> CapturedVariables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn capture_all(phase: Phase, mut captured: CapturedVariables) -> CapturedVariables {
    for id in get_unanswered_variables(phase, &captured) {
        captured = capture_variable(id, json!("x"), &captured);
    }
    captured
}

#[test]
fn captured_variables_are_never_unanswered() {
    let mut map = CapturedVariables::new();
    for (i, v) in variables().iter().enumerate() {
        if i % 3 == 0 {
            map = capture_variable(v.id, json!(i), &map);
        }
    }
    for v in variables() {
        let unanswered = get_unanswered_variables(v.phase, &map);
        if map.contains_key(v.id) {
            assert!(!unanswered.contains(&v.id), "{} re-asked", v.id);
        } else {
            assert!(unanswered.contains(&v.id), "{} missing", v.id);
        }
    }
}

#[test]
fn gated_follow_up_depends_on_gate_answer() {
    let no = captured(&[("pikiran_bunuhdiri", json!("tidak"))]);
    let yes = captured(&[("pikiran_bunuhdiri", json!("ya"))]);
    assert!(!should_ask_variable("C_SSRS_Q3_method", &no));
    assert!(should_ask_variable("C_SSRS_Q3_method", &yes));
}

#[test]
fn gate_matches_ya_and_iya_in_any_case_only() {
    for answer in ["ya", "YA", "Iya", "iYA"] {
        let map = captured(&[("pikiran_bunuhdiri", json!(answer))]);
        assert!(should_ask_variable("C_SSRS_Q5_plan", &map), "{answer}");
    }
    for answer in [json!("y"), json!(" ya"), json!("yes"), json!(true), json!(1)] {
        let map = captured(&[("pikiran_bunuhdiri", answer.clone())]);
        assert!(!should_ask_variable("C_SSRS_Q5_plan", &map), "{answer}");
    }
    assert!(!should_ask_variable("C_SSRS_Q5_plan", &CapturedVariables::new()));
}

#[test]
fn captured_gated_variable_is_not_asked_again() {
    let map = captured(&[
        ("pikiran_bunuhdiri", json!("iya")),
        ("C_SSRS_Q4_intent", json!("tidak")),
    ]);
    assert!(!should_ask_variable("C_SSRS_Q4_intent", &map));
    assert!(should_ask_variable("C_SSRS_Q6_behavior", &map));
}

#[test]
fn ungated_variables_are_asked_until_captured() {
    let empty = CapturedVariables::new();
    assert!(should_ask_variable("usia", &empty));
    let map = capture_variable("usia", json!(54), &empty);
    assert!(!should_ask_variable("usia", &map));
}

#[test]
fn capture_leaves_input_untouched() {
    let before = captured(&[("consent", json!(true))]);
    let after = capture_variable("usia", json!(60), &before);
    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(after["usia"], json!(60));
}

#[test]
fn capture_is_idempotent() {
    let base = captured(&[("consent", json!(true))]);
    let once = capture_variable("pendidikan", json!("SMA"), &base);
    let twice = capture_variable("pendidikan", json!("SMA"), &once);
    assert_eq!(once, twice);
}

#[test]
fn progress_never_decreases_on_capture() {
    let mut map = CapturedVariables::new();
    for phase in Phase::ALL {
        let ids: Vec<_> = hypercare_aski::variables_for_phase(phase).map(|v| v.id).collect();
        for id in ids {
            let before = get_phase_progress(phase, &map);
            map = capture_variable(id, json!("ya"), &map);
            let after = get_phase_progress(phase, &map);
            assert!(after.completed >= before.completed);
            assert!(after.percentage >= before.percentage);
        }
        assert!(is_phase_complete(phase, &map));
    }
    assert_eq!(overall_progress(&map).percentage, 100);
}

#[test]
fn progress_rounds_percentage() {
    let map = captured(&[("consent", json!(true)), ("nama_pasien", json!("Ani"))]);
    assert_eq!(
        get_phase_progress(Phase::Orientation, &map),
        PhaseProgress {
            completed: 2,
            total: 8,
            percentage: 25,
        }
    );
    // 1 of 6 = 16.67%
    let map = captured(&[("keluhan_utama", json!("pusing"))]);
    assert_eq!(get_phase_progress(Phase::Interaksi, &map).percentage, 17);
}

#[test]
fn unknown_phase_name_reports_zero_progress() {
    let map = captured(&[("consent", json!(true))]);
    assert_eq!(phase_progress_by_name("triage", &map), PhaseProgress::default());
    assert_eq!(phase_progress_by_name("orientation", &map).completed, 1);
}

#[test]
fn keys_outside_registry_do_not_count() {
    let map = captured(&[("golongan_darah", json!("O"))]);
    assert_eq!(overall_progress(&map).completed, 0);
    assert_eq!(get_next_variable(Phase::Orientation, &map), Some("consent"));
}

#[test]
fn orientation_walkthrough_completes_phase() {
    let mut map = CapturedVariables::new();
    assert_eq!(get_next_variable(Phase::Orientation, &map), Some("consent"));

    let answers = [
        ("consent", json!(true)),
        ("nama_pasien", json!("Budi")),
        ("informed_consent", json!(true)),
        ("usia", json!(58)),
        ("tanggal_lahir", json!("1966-03-12")),
        ("jenis_kelamin", json!("laki-laki")),
        ("pendidikan", json!("SMA")),
        ("pekerjaan", json!("petani")),
    ];
    for (id, value) in answers {
        assert_eq!(get_next_variable(Phase::Orientation, &map), Some(id));
        map = capture_variable(id, value, &map);
    }

    assert!(is_phase_complete(Phase::Orientation, &map));
    assert_eq!(get_next_variable(Phase::Orientation, &map), None);
    assert_eq!(get_phase_progress(Phase::Orientation, &map).percentage, 100);
}

#[test]
fn next_variable_ignores_gate_but_askable_variant_respects_it() {
    let map = captured(&[
        ("keinginan_mati", json!("tidak")),
        ("pikiran_bunuhdiri", json!("tidak")),
    ]);
    assert_eq!(get_next_variable(Phase::Cssrs, &map), Some("C_SSRS_Q3_method"));
    assert_eq!(get_next_askable_variable(Phase::Cssrs, &map), None);
    assert!(!is_high_risk(&map));
}

#[test]
fn advance_stays_in_phase_with_open_questions() {
    let map = captured(&[("consent", json!(true))]);
    let step = advance(Phase::Orientation, &map);
    assert_eq!(step.phase, Phase::Orientation);
    assert_eq!(step.current_variable, Some("nama_pasien"));
}

#[test]
fn advance_moves_to_next_phase_when_exhausted() {
    let map = capture_all(Phase::Orientation, CapturedVariables::new());
    let step = advance(Phase::Orientation, &map);
    assert_eq!(step.phase, Phase::Interaksi);
    assert_eq!(step.current_variable, Some("keluhan_utama"));
}

#[test]
fn advance_skips_gated_follow_ups_after_negative_gate() {
    let mut map = CapturedVariables::new();
    for phase in [Phase::Orientation, Phase::Interaksi, Phase::Screening] {
        map = capture_all(phase, map);
    }
    map = capture_variable("keinginan_mati", json!("tidak"), &map);
    map = capture_variable("pikiran_bunuhdiri", json!("tidak"), &map);

    let step = advance(Phase::Cssrs, &map);
    assert_eq!(step.phase, Phase::Insight);
    assert_eq!(step.current_variable, Some("pemahaman_penyakit"));
}

#[test]
fn advance_asks_follow_ups_after_affirmative_gate() {
    let map = captured(&[
        ("keinginan_mati", json!("ya")),
        ("pikiran_bunuhdiri", json!("Iya")),
    ]);
    let step = advance(Phase::Cssrs, &map);
    assert_eq!(step.phase, Phase::Cssrs);
    assert_eq!(step.current_variable, Some("C_SSRS_Q3_method"));
    assert!(is_high_risk(&map));
}

#[test]
fn advance_rests_at_closing() {
    let mut map = CapturedVariables::new();
    for phase in Phase::ALL {
        map = capture_all(phase, map);
    }
    let step = advance(Phase::Closing, &map);
    assert_eq!(step.phase, Phase::Closing);
    assert_eq!(step.current_variable, None);

    let from_start = advance(Phase::Orientation, &map);
    assert_eq!(from_start.phase, Phase::Closing);
    assert_eq!(from_start.current_variable, None);
}

#[test]
fn affirmative_only_matches_strings() {
    assert!(is_affirmative(&json!("ya")));
    assert!(!is_affirmative(&json!(null)));
    assert!(!is_affirmative(&json!(["ya"])));
}
