use hypercare_core::models::phase::Phase;

use crate::variable::{InterviewVariable, ValueType};

const P: Phase = Phase::Closing;

pub(crate) const VARIABLES: &[InterviewVariable] = &[
    InterviewVariable::new(
        "ringkasan_dipahami",
        P,
        ValueType::Boolean,
        "Apakah ringkasan percakapan kita sudah sesuai dengan yang Anda rasakan?",
    ),
    InterviewVariable::new(
        "rencana_tindak_lanjut",
        P,
        ValueType::String,
        "Langkah apa yang akan Anda lakukan setelah sesi ini?",
    ),
    InterviewVariable::new(
        "kesediaan_kontrol",
        P,
        ValueType::Boolean,
        "Apakah Anda bersedia melakukan kontrol ke fasilitas kesehatan?",
    ),
];
