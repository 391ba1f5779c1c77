//! Backend-agnostic JSON document store.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::objects::{self, Precondition};
use crate::state;

/// A stored value together with the ETag it was read at.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub value: T,
    pub etag: String,
}

impl<T> Versioned<T> {
    /// The guard to write this value back with.
    pub fn precondition(&self) -> Precondition {
        Precondition::IfMatch(self.etag.clone())
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    next_etag: AtomicU64,
}

impl MemoryBackend {
    fn fresh_etag(&self) -> String {
        format!("\"{}\"", self.next_etag.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// Where assessment documents live.
#[derive(Clone)]
pub enum StateStore {
    S3 { client: Client, bucket: String },
    Memory(Arc<MemoryBackend>),
}

impl StateStore {
    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        StateStore::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn memory() -> Self {
        StateStore::Memory(Arc::default())
    }

    /// Load a document. `Ok(None)` if nothing is stored under `key`.
    pub async fn load<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Versioned<T>>, StorageError> {
        let loaded = match self {
            StateStore::S3 { client, bucket } => {
                match state::load_state(client, bucket, key).await {
                    Ok((value, etag)) => Some(Versioned { value, etag }),
                    Err(StorageError::NotFound { .. }) => None,
                    Err(e) => return Err(e),
                }
            }
            StateStore::Memory(backend) => {
                let objects = backend.objects.lock().await;
                match objects.get(key) {
                    Some((body, etag)) => Some(Versioned {
                        value: serde_json::from_slice(body)?,
                        etag: etag.clone(),
                    }),
                    None => None,
                }
            }
        };
        tracing::debug!(key, found = loaded.is_some(), "state loaded");
        Ok(loaded)
    }

    /// Store a document under `precondition`. Returns the new ETag.
    pub async fn save<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        precondition: &Precondition,
    ) -> Result<String, StorageError> {
        let result = match self {
            StateStore::S3 { client, bucket } => {
                state::save_state(client, bucket, key, value, precondition).await
            }
            StateStore::Memory(backend) => {
                let body = serde_json::to_vec(value)?;
                let mut objects = backend.objects.lock().await;
                let current = objects.get(key).map(|(_, etag)| etag.as_str());
                let allowed = match precondition {
                    Precondition::None => true,
                    Precondition::IfMatch(expected) => current == Some(expected.as_str()),
                    Precondition::IfAbsent => current.is_none(),
                };
                if allowed {
                    let etag = backend.fresh_etag();
                    objects.insert(key.to_string(), (body, etag.clone()));
                    Ok(etag)
                } else {
                    Err(StorageError::PreconditionFailed {
                        key: key.to_string(),
                    })
                }
            }
        };
        match &result {
            Ok(etag) => tracing::debug!(key, etag = %etag, "state saved"),
            Err(StorageError::PreconditionFailed { .. }) => {
                tracing::warn!(key, "state write lost a concurrent update")
            }
            Err(e) => tracing::error!(key, error = %e, "state save failed"),
        }
        result
    }

    /// Remove a document. Missing keys are not an error.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self {
            StateStore::S3 { client, bucket } => {
                objects::delete_object(client, bucket, key).await?
            }
            StateStore::Memory(backend) => {
                backend.objects.lock().await.remove(key);
            }
        }
        tracing::debug!(key, "state deleted");
        Ok(())
    }
}
