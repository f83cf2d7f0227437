//! Report periods and stats bundle selection.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tillpoint_core::{DomainError, DomainResult};

/// Reporting period keys offered by the report views.
///
/// `Custom` is only meaningful together with an explicit [`DateRange`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKey {
    Today,
    Week,
    Month,
    Quarter,
    Year,
    Custom,
}

impl PeriodKey {
    /// Lowercase wire name, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Custom => "custom",
        }
    }
}

impl core::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            "custom" => Ok(Self::Custom),
            _ => Err(DomainError::not_found()),
        }
    }
}

/// Inclusive report date range. Construction enforces `from ≤ to`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> DomainResult<Self> {
        if from > to {
            return Err(DomainError::validation("date_range"));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Externally supplied figures for one reporting period.
///
/// The core does not derive these from a transaction ledger; the caller
/// provides them and the aggregator only selects and annotates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsBundle {
    pub revenue_cents: i64,
    pub transactions: i64,
    pub customers: i64,
    pub avg_order_cents: i64,
    /// Growth versus the previous period, in percent.
    pub growth_rate_pct: f64,
}

/// Select the stats bundle for `key`.
///
/// An unknown key fails `NotFound`, as does a known period with no bundle.
/// `"custom"` additionally requires a date range and fails `Validation`
/// (naming `date_range`) without one; for the fixed periods any supplied
/// range is ignored.
pub fn select_period<'a>(
    stats_by_period: &'a HashMap<PeriodKey, StatsBundle>,
    key: &str,
    range: Option<DateRange>,
) -> DomainResult<&'a StatsBundle> {
    let period: PeriodKey = key.parse()?;
    if period == PeriodKey::Custom && range.is_none() {
        return Err(DomainError::validation("date_range"));
    }

    let bundle = stats_by_period
        .get(&period)
        .ok_or_else(DomainError::not_found)?;
    tracing::debug!(period = %period, "report period selected");
    Ok(bundle)
}
