use std::sync::LazyLock;

use hypercare_core::models::diagnosis::DiagnosisCode;

use crate::knowledge::{AbilityCategory::*, Diagnosis, abilities, symptoms};

pub(crate) static DIAGNOSIS: LazyLock<Diagnosis> = LazyLock::new(|| Diagnosis {
    code: DiagnosisCode::RBD,
    name: "Risiko Bunuh Diri".to_string(),
    description: "Adanya pikiran, rencana, atau riwayat upaya mengakhiri hidup.".to_string(),
    symptoms: symptoms(
        "rbd",
        &[
            ("ingin_mati", "Mengungkapkan keinginan untuk mati"),
            ("riwayat_percobaan", "Riwayat percobaan bunuh diri"),
            ("putus_asa", "Merasa putus asa dan tidak berharga"),
            ("menarik_diri", "Menarik diri dari lingkungan"),
            ("memberi_barang", "Memberikan barang berharga kepada orang lain"),
            ("perubahan_perilaku", "Perubahan perilaku secara tiba-tiba"),
        ],
    ),
    abilities: abilities(
        "rbd",
        &[
            ("tanda_bahaya", "Mengenal tanda bahaya risiko bunuh diri", Knowledge),
            ("hal_positif", "Mengidentifikasi hal positif dalam diri", Practice),
            ("kendalikan_dorongan", "Mengendalikan dorongan bunuh diri", Practice),
            ("rencana_masa_depan", "Menyusun rencana masa depan yang realistis", Practice),
            ("minta_bantuan", "Menghubungi orang terdekat atau layanan darurat", Practice),
        ],
    ),
});
