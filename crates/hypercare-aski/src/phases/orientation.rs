use hypercare_core::models::phase::Phase;

use crate::variable::{InterviewVariable, ValueType};

const P: Phase = Phase::Orientation;

/// Identity and consent. Collected before any clinical question.
pub(crate) const VARIABLES: &[InterviewVariable] = &[
    InterviewVariable::new(
        "consent",
        P,
        ValueType::Boolean,
        "Apakah Anda bersedia mengikuti sesi wawancara ini?",
    ),
    InterviewVariable::new("nama_pasien", P, ValueType::String, "Siapa nama Anda?"),
    InterviewVariable::new(
        "informed_consent",
        P,
        ValueType::Boolean,
        "Apakah Anda memahami tujuan wawancara dan setuju jawaban Anda dicatat?",
    ),
    InterviewVariable::new("usia", P, ValueType::Number, "Berapa usia Anda saat ini?"),
    InterviewVariable::new("tanggal_lahir", P, ValueType::String, "Kapan tanggal lahir Anda?"),
    InterviewVariable::new("jenis_kelamin", P, ValueType::String, "Apa jenis kelamin Anda?"),
    InterviewVariable::new(
        "pendidikan",
        P,
        ValueType::String,
        "Apa pendidikan terakhir Anda?",
    ),
    InterviewVariable::new("pekerjaan", P, ValueType::String, "Apa pekerjaan Anda sehari-hari?"),
];
