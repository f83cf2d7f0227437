//! Store-assigned record identifiers.

use serde::{Deserialize, Serialize};

/// Sequential identifier assigned by a [`RecordStore`](crate::RecordStore).
///
/// Within one store instance ids are unique, monotonically increasing, and
/// never reused after a delete. Entity crates wrap this in their own newtype
/// (`ProductId`, `CustomerId`) so ids of different collections cannot be
/// mixed up.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
