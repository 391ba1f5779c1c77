use std::env;

/// Which backend holds assessment documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

/// Runtime configuration, read once from the environment at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub bucket: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let store = match lookup("HYPERCARE_STORE").as_deref() {
            None | Some("s3") => StoreKind::S3,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(eyre::eyre!(
                    "HYPERCARE_STORE must be 's3' or 'memory', got '{other}'"
                ));
            }
        };
        let bucket = lookup("HYPERCARE_BUCKET").unwrap_or_else(|| "hypercare".to_string());
        Ok(Self { store, bucket })
    }
}
