use hypercare_core::models::phase::Phase;

use crate::variable::{InterviewVariable, ValueType};

const P: Phase = Phase::Insight;

pub(crate) const VARIABLES: &[InterviewVariable] = &[
    InterviewVariable::new(
        "pemahaman_penyakit",
        P,
        ValueType::String,
        "Menurut Anda, apa penyebab tekanan darah Anda naik?",
    ),
    InterviewVariable::new(
        "penerimaan_diagnosis",
        P,
        ValueType::String,
        "Bagaimana perasaan Anda menerima kondisi kesehatan Anda?",
    ),
    InterviewVariable::new(
        "motivasi_berubah",
        P,
        ValueType::String,
        "Kebiasaan apa yang ingin Anda ubah untuk kesehatan Anda?",
    ),
    InterviewVariable::new(
        "harapan_pengobatan",
        P,
        ValueType::String,
        "Apa harapan Anda dari pengobatan ini?",
    ),
    InterviewVariable::new(
        "strategi_koping",
        P,
        ValueType::String,
        "Apa yang biasa Anda lakukan saat merasa tertekan?",
    ),
];
