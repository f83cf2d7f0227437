//! `tillpoint-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared error model, store-assigned identifiers, the generic record
//! store with copy-on-write snapshots, and snapshot filtering.

pub mod error;
pub mod id;
pub mod record;
pub mod search;
pub mod store;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use record::StoredRecord;
pub use store::{RecordStore, Snapshot};
