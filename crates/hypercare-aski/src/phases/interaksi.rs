use hypercare_core::models::phase::Phase;

use crate::variable::{InterviewVariable, ValueType};

const P: Phase = Phase::Interaksi;

pub(crate) const VARIABLES: &[InterviewVariable] = &[
    InterviewVariable::new(
        "keluhan_utama",
        P,
        ValueType::String,
        "Apa keluhan yang paling mengganggu Anda akhir-akhir ini?",
    ),
    InterviewVariable::new(
        "riwayat_hipertensi",
        P,
        ValueType::Boolean,
        "Apakah dokter pernah menyatakan Anda memiliki tekanan darah tinggi?",
    ),
    InterviewVariable::new(
        "lama_hipertensi",
        P,
        ValueType::Number,
        "Sudah berapa tahun Anda mengalami tekanan darah tinggi?",
    ),
    InterviewVariable::new(
        "obat_rutin",
        P,
        ValueType::String,
        "Obat apa saja yang rutin Anda minum?",
    ),
    InterviewVariable::new(
        "kepatuhan_obat",
        P,
        ValueType::String,
        "Seberapa sering Anda lupa atau sengaja tidak minum obat?",
    ),
    InterviewVariable::new(
        "dukungan_keluarga",
        P,
        ValueType::String,
        "Siapa di keluarga yang membantu Anda menjalani pengobatan?",
    ),
];
