//! `tillpoint-reporting` — period-scoped report aggregation.
//!
//! The aggregator never computes report figures from raw sales data; every
//! total is externally supplied. This crate selects the right bundle for a
//! period, ranks top contributors, normalizes breakdown percentages, and
//! states the net-revenue identity. Zero totals normalize to 0%, never NaN.

pub mod breakdown;
pub mod period;
pub mod rank;
pub mod transaction;

pub use breakdown::{
    BreakdownEntry, NormalizedEntry, TaxDiscountReport, net_revenue_cents, normalize_breakdown,
};
pub use period::{DateRange, PeriodKey, StatsBundle, select_period};
pub use rank::{Contributor, RankedContributor, rank_top_contributors};
pub use transaction::{Transaction, TransactionId, recent};

/// amount / total × 100, defined as 0 when the total is 0.
pub(crate) fn share_of_total(amount_cents: i64, total_cents: i64) -> f64 {
    if total_cents == 0 {
        return 0.0;
    }
    amount_cents as f64 / total_cents as f64 * 100.0
}
