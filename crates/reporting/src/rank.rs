//! Top-contributor ranking for sales reports.

use serde::{Deserialize, Serialize};

use crate::share_of_total;

/// One revenue contributor (e.g. a product line in the sales report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub revenue_cents: i64,
    pub quantity: i64,
}

/// A contributor annotated with its share of total revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedContributor {
    pub name: String,
    pub revenue_cents: i64,
    pub quantity: i64,
    pub percentage: f64,
}

/// Rank contributors by revenue, descending, each annotated with its share
/// of the total across the FULL input (computed before truncating to
/// `limit`), so the shares of the complete set always sum to 100.
///
/// Revenue ties order by name. When total revenue is 0, every percentage
/// is 0.
pub fn rank_top_contributors(items: &[Contributor], limit: usize) -> Vec<RankedContributor> {
    let total: i64 = items.iter().map(|c| c.revenue_cents).sum();

    let mut ranked: Vec<RankedContributor> = items
        .iter()
        .map(|c| RankedContributor {
            name: c.name.clone(),
            revenue_cents: c.revenue_cents,
            quantity: c.quantity,
            percentage: share_of_total(c.revenue_cents, total),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.revenue_cents
            .cmp(&a.revenue_cents)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}
