use std::sync::LazyLock;

use hypercare_core::models::diagnosis::DiagnosisCode;

use crate::knowledge::{AbilityCategory::*, Diagnosis, abilities, symptoms};

/// HT: Hipertensi. Seven physical complaints, three knowledge items and
/// five self-care practices.
pub(crate) static DIAGNOSIS: LazyLock<Diagnosis> = LazyLock::new(|| Diagnosis {
    code: DiagnosisCode::HT,
    name: "Hipertensi".to_string(),
    description: "Tekanan darah menetap di atas 140/90 mmHg beserta keluhan fisiknya."
        .to_string(),
    symptoms: symptoms(
        "ht",
        &[
            ("sakit_kepala", "Sakit kepala"),
            ("tengkuk_berat", "Tengkuk terasa berat atau tegang"),
            ("pusing", "Pusing"),
            ("mudah_lelah", "Mudah lelah"),
            ("sulit_tidur", "Sulit tidur"),
            ("berdebar", "Jantung berdebar"),
            ("pandangan_kabur", "Pandangan kabur"),
        ],
    ),
    abilities: abilities(
        "ht",
        &[
            ("pengertian", "Memahami pengertian hipertensi", Knowledge),
            ("tanda_gejala", "Mengenal tanda dan gejala hipertensi", Knowledge),
            ("komplikasi", "Mengetahui komplikasi hipertensi", Knowledge),
            ("minum_obat", "Minum obat antihipertensi secara teratur", Practice),
            ("diet_garam", "Menjalankan diet rendah garam", Practice),
            ("olahraga", "Berolahraga ringan secara teratur", Practice),
            ("ukur_tensi", "Mengukur tekanan darah secara rutin", Practice),
            ("napas_dalam", "Melakukan relaksasi napas dalam", Practice),
        ],
    ),
});
