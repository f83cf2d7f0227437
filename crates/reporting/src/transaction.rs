//! Read-only transaction feed shown on the dashboard.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tillpoint_core::DomainError;
use tillpoint_customers::CustomerId;

/// Transaction identifier, assigned by the upstream register rather than
/// by this core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TransactionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|_| DomainError::validation("transaction_id"))?;
        Ok(Self(uuid))
    }
}

/// A completed sale, externally supplied for display.
///
/// Report figures are never derived from these; deleting a customer leaves
/// its transactions untouched (there is no cross-store coordination).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_id: CustomerId,
    pub amount_cents: i64,
    pub item_count: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Most recent transactions first, truncated to `limit`.
///
/// Ties on the timestamp order by id so repeated calls agree exactly.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    ordered.truncate(limit);
    ordered
}
