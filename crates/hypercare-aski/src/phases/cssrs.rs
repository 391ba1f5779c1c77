use hypercare_core::models::phase::Phase;

use crate::variable::{InterviewVariable, ValueType};

const P: Phase = Phase::Cssrs;

/// Variable whose affirmative answer unlocks the gated follow-ups.
pub const SUICIDAL_IDEATION_GATE: &str = "pikiran_bunuhdiri";

/// Columbia suicide severity screening. Q3 onward is gated.
pub(crate) const VARIABLES: &[InterviewVariable] = &[
    InterviewVariable::new(
        "keinginan_mati",
        P,
        ValueType::String,
        "Dalam sebulan terakhir, apakah Anda pernah berharap sudah meninggal atau tertidur dan tidak bangun lagi?",
    ),
    InterviewVariable::new(
        SUICIDAL_IDEATION_GATE,
        P,
        ValueType::String,
        "Dalam sebulan terakhir, apakah Anda pernah berpikir untuk bunuh diri?",
    ),
    InterviewVariable::new(
        "C_SSRS_Q3_method",
        P,
        ValueType::String,
        "Apakah Anda pernah memikirkan cara untuk melakukannya?",
    )
    .gated(),
    InterviewVariable::new(
        "C_SSRS_Q4_intent",
        P,
        ValueType::String,
        "Apakah Anda punya niat untuk benar-benar melakukannya?",
    )
    .gated(),
    InterviewVariable::new(
        "C_SSRS_Q5_plan",
        P,
        ValueType::String,
        "Apakah Anda sudah menyusun rencana secara rinci?",
    )
    .gated(),
    InterviewVariable::new(
        "C_SSRS_Q6_behavior",
        P,
        ValueType::String,
        "Apakah Anda pernah melakukan sesuatu untuk mengakhiri hidup?",
    )
    .gated(),
    InterviewVariable::new(
        "C_SSRS_Q6_recent",
        P,
        ValueType::String,
        "Apakah hal itu terjadi dalam tiga bulan terakhir?",
    )
    .gated(),
];
