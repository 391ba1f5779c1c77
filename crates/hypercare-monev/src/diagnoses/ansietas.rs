use std::sync::LazyLock;

use hypercare_core::models::diagnosis::DiagnosisCode;

use crate::knowledge::{AbilityCategory::*, Diagnosis, abilities, symptoms};

pub(crate) static DIAGNOSIS: LazyLock<Diagnosis> = LazyLock::new(|| Diagnosis {
    code: DiagnosisCode::AS,
    name: "Ansietas".to_string(),
    description: "Kekhawatiran berlebihan terhadap penyakit dan masa depan.".to_string(),
    symptoms: symptoms(
        "as",
        &[
            ("khawatir", "Merasa khawatir akan kondisi yang dihadapi"),
            ("sulit_konsentrasi", "Sulit berkonsentrasi"),
            ("gelisah", "Tampak gelisah"),
            ("tegang", "Tampak tegang"),
            ("sulit_tidur", "Sulit tidur"),
            ("nadi_cepat", "Nadi dan napas terasa cepat"),
            ("bingung", "Merasa bingung"),
            ("tremor", "Tangan gemetar"),
        ],
    ),
    abilities: abilities(
        "as",
        &[
            ("pengertian", "Mengenal penyebab dan tanda ansietas", Knowledge),
            ("napas_dalam", "Melakukan relaksasi napas dalam", Practice),
            ("distraksi", "Melakukan distraksi dengan bercakap-cakap", Practice),
            ("hipnosis_lima_jari", "Melakukan hipnosis lima jari", Practice),
            ("spiritual", "Melakukan kegiatan spiritual", Practice),
        ],
    ),
});
