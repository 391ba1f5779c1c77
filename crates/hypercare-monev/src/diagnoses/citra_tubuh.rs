use std::sync::LazyLock;

use hypercare_core::models::diagnosis::DiagnosisCode;

use crate::knowledge::{AbilityCategory::*, Diagnosis, abilities, symptoms};

pub(crate) static DIAGNOSIS: LazyLock<Diagnosis> = LazyLock::new(|| Diagnosis {
    code: DiagnosisCode::GCT,
    name: "Gangguan Citra Tubuh".to_string(),
    description: "Perasaan negatif terhadap perubahan tubuh akibat penyakit.".to_string(),
    symptoms: symptoms(
        "gct",
        &[
            ("perasaan_negatif", "Mengungkapkan perasaan negatif tentang tubuh"),
            ("menyembunyikan", "Menyembunyikan bagian tubuh yang berubah"),
            ("menghindari", "Menghindari melihat atau menyentuh bagian tubuh"),
            ("fokus_perubahan", "Fokus berlebihan pada perubahan tubuh"),
            ("menolak", "Menolak perubahan yang terjadi"),
            ("menarik_diri", "Hubungan sosial berkurang"),
        ],
    ),
    abilities: abilities(
        "gct",
        &[
            ("pengertian", "Mengenal citra tubuh dan perubahannya", Knowledge),
            ("bagian_sehat", "Mengidentifikasi bagian tubuh yang masih sehat", Practice),
            ("merawat_diri", "Merawat dan berdandan untuk meningkatkan citra tubuh", Practice),
            ("aktivitas", "Melakukan aktivitas sesuai kemampuan tubuh", Practice),
            ("bersosialisasi", "Bercakap-cakap dan bergaul dengan orang lain", Practice),
        ],
    ),
});
