//! hypercare-core
//!
//! Shared vocabulary of the HyperCare assessment engine: interview phases,
//! diagnosis codes, persisted row shapes, and storage key conventions.
//! No AWS SDK dependency.

pub mod error;
pub mod keys;
pub mod models;
