//! Labeled amount breakdowns (tax, discounts) and the net-revenue identity.

use serde::{Deserialize, Serialize};

use crate::share_of_total;

/// One labeled amount in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub amount_cents: i64,
}

/// A breakdown entry annotated with its share of the breakdown total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub label: String,
    pub amount_cents: i64,
    pub percentage: f64,
}

/// Annotate each entry with amount / Σ amount × 100, preserving input order.
///
/// When the total is 0 every percentage is 0. Tax and discount breakdowns
/// normalize identically through this one function.
pub fn normalize_breakdown(entries: &[BreakdownEntry]) -> Vec<NormalizedEntry> {
    let total: i64 = entries.iter().map(|e| e.amount_cents).sum();
    entries
        .iter()
        .map(|e| NormalizedEntry {
            label: e.label.clone(),
            amount_cents: e.amount_cents,
            percentage: share_of_total(e.amount_cents, total),
        })
        .collect()
}

/// Net revenue identity over externally supplied totals:
/// revenue − tax − discounts.
///
/// The core never derives tax or discounts from transactions; this states
/// the relationship between figures the caller already has.
pub fn net_revenue_cents(
    total_revenue_cents: i64,
    total_tax_cents: i64,
    total_discounts_cents: i64,
) -> i64 {
    total_revenue_cents - total_tax_cents - total_discounts_cents
}

/// Tax and discount figures for one reporting period, externally supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDiscountReport {
    pub total_tax_cents: i64,
    pub total_discounts_cents: i64,
    pub tax_breakdown: Vec<BreakdownEntry>,
    pub discount_breakdown: Vec<BreakdownEntry>,
}

impl TaxDiscountReport {
    pub fn normalized_tax_breakdown(&self) -> Vec<NormalizedEntry> {
        normalize_breakdown(&self.tax_breakdown)
    }

    pub fn normalized_discount_breakdown(&self) -> Vec<NormalizedEntry> {
        normalize_breakdown(&self.discount_breakdown)
    }

    /// Net revenue for a supplied gross revenue figure.
    pub fn net_revenue_cents(&self, total_revenue_cents: i64) -> i64 {
        net_revenue_cents(
            total_revenue_cents,
            self.total_tax_cents,
            self.total_discounts_cents,
        )
    }

    /// Whether an externally supplied net figure matches the identity.
    ///
    /// The supplied totals are independent inputs; nothing forces them to
    /// reconcile, so this only checks and reports.
    pub fn reconciles(&self, total_revenue_cents: i64, supplied_net_cents: i64) -> bool {
        self.net_revenue_cents(total_revenue_cents) == supplied_net_cents
    }
}
