pub(crate) mod ansietas;
pub(crate) mod citra_tubuh;
pub(crate) mod hipertensi;
pub(crate) mod risiko_bunuh_diri;
