//! Stateless text and category filtering over collection snapshots.
//!
//! Both filters are pure predicates over a slice; composing them is a plain
//! intersection, so text-then-category equals category-then-text.

/// Projects one searchable string out of a record.
pub type FieldSelector<T> = fn(&T) -> &str;

/// Sentinel category value that bypasses the category filter.
pub const CATEGORY_ALL: &str = "all";

/// Whether any selected field contains `query`, case-insensitively.
///
/// An empty or whitespace-only query matches everything.
pub fn matches_query<T>(record: &T, query: &str, fields: &[FieldSelector<T>]) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field(record).to_lowercase().contains(&needle))
}

/// Exact, case-sensitive category match. [`CATEGORY_ALL`] matches everything.
pub fn matches_category(value: &str, category: &str) -> bool {
    category == CATEGORY_ALL || value == category
}

/// Records whose selected fields contain `query` (case-insensitive substring).
pub fn filter<'a, T>(records: &'a [T], query: &str, fields: &[FieldSelector<T>]) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query, fields))
        .collect()
}

/// Records whose category field equals `category` exactly.
pub fn filter_by_category<'a, T>(
    records: &'a [T],
    category: &str,
    field: FieldSelector<T>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_category(field(*record), category))
        .collect()
}
