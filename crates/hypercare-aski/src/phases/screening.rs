use hypercare_core::models::phase::Phase;

use crate::variable::{InterviewVariable, ScreeningDomain, ValueType};

const P: Phase = Phase::Screening;
const BIO: ScreeningDomain = ScreeningDomain::Biological;
const PSY: ScreeningDomain = ScreeningDomain::Psychological;
const BODY: ScreeningDomain = ScreeningDomain::BodyImage;
const SOC: ScreeningDomain = ScreeningDomain::Social;

/// Bio-psycho-social screening, grouped by domain.
pub(crate) const VARIABLES: &[InterviewVariable] = &[
    InterviewVariable::new(
        "tekanan_darah_terakhir",
        P,
        ValueType::String,
        "Berapa hasil pengukuran tekanan darah Anda yang terakhir?",
    )
    .in_domain(BIO),
    InterviewVariable::new(
        "nyeri_kepala",
        P,
        ValueType::Boolean,
        "Apakah Anda sering merasa sakit kepala atau tengkuk terasa berat?",
    )
    .in_domain(BIO),
    InterviewVariable::new(
        "pola_tidur",
        P,
        ValueType::String,
        "Bagaimana kualitas tidur Anda dalam dua minggu terakhir?",
    )
    .in_domain(BIO),
    InterviewVariable::new(
        "nafsu_makan",
        P,
        ValueType::String,
        "Apakah ada perubahan nafsu makan belakangan ini?",
    )
    .in_domain(BIO),
    InterviewVariable::new(
        "aktivitas_fisik",
        P,
        ValueType::String,
        "Seberapa sering Anda berolahraga atau bergerak aktif dalam seminggu?",
    )
    .in_domain(BIO),
    InterviewVariable::new(
        "perasaan_cemas",
        P,
        ValueType::String,
        "Seberapa sering Anda merasa cemas atau khawatir berlebihan?",
    )
    .in_domain(PSY),
    InterviewVariable::new(
        "perasaan_sedih",
        P,
        ValueType::String,
        "Apakah Anda sering merasa sedih, murung, atau putus asa?",
    )
    .in_domain(PSY),
    InterviewVariable::new(
        "mudah_marah",
        P,
        ValueType::Boolean,
        "Apakah Anda merasa lebih mudah marah atau tersinggung?",
    )
    .in_domain(PSY),
    InterviewVariable::new(
        "sulit_konsentrasi",
        P,
        ValueType::Boolean,
        "Apakah Anda sulit berkonsentrasi pada pekerjaan sehari-hari?",
    )
    .in_domain(PSY),
    InterviewVariable::new(
        "persepsi_tubuh",
        P,
        ValueType::String,
        "Bagaimana perasaan Anda terhadap kondisi tubuh Anda sekarang?",
    )
    .in_domain(BODY),
    InterviewVariable::new(
        "perubahan_berat_badan",
        P,
        ValueType::String,
        "Apakah berat badan Anda berubah sejak sakit?",
    )
    .in_domain(BODY),
    InterviewVariable::new(
        "malu_penyakit",
        P,
        ValueType::Boolean,
        "Apakah Anda merasa malu atau minder karena penyakit Anda?",
    )
    .in_domain(BODY),
    InterviewVariable::new(
        "interaksi_sosial",
        P,
        ValueType::String,
        "Bagaimana hubungan Anda dengan tetangga dan teman?",
    )
    .in_domain(SOC),
    InterviewVariable::new(
        "dukungan_sosial",
        P,
        ValueType::String,
        "Kepada siapa Anda biasanya bercerita saat ada masalah?",
    )
    .in_domain(SOC),
    InterviewVariable::new(
        "peran_keluarga",
        P,
        ValueType::String,
        "Apakah penyakit ini mengubah peran Anda di keluarga?",
    )
    .in_domain(SOC),
    InterviewVariable::new(
        "aktivitas_sosial",
        P,
        ValueType::String,
        "Apakah Anda masih mengikuti kegiatan di lingkungan sekitar?",
    )
    .in_domain(SOC),
];
