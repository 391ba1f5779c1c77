//! hypercare-storage
//!
//! Persistence for assessment rows and Monev snapshots. JSON documents in
//! S3 with ETag optimistic locking, or an in-process map with the same
//! semantics for tests and local runs.

pub mod client;
pub mod error;
pub mod objects;
pub mod state;
pub mod store;
