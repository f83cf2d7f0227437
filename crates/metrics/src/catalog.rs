//! Catalog statistics: counts, inventory value, category spread.

use std::collections::BTreeSet;

use tillpoint_catalog::Product;

/// Number of products in the snapshot.
pub fn total_count(products: &[Product]) -> usize {
    products.len()
}

/// Number of active products.
pub fn active_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.is_active()).count()
}

/// Total inventory value in cents: Σ price × stock.
pub fn inventory_value_cents(products: &[Product]) -> i64 {
    products
        .iter()
        .map(|p| p.price_cents.saturating_mul(p.stock))
        .sum()
}

/// Number of distinct category values in the snapshot.
pub fn distinct_categories(products: &[Product]) -> usize {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_catalog::{ProductId, ProductStatus};
    use tillpoint_core::RecordId;

    fn product(id: u64, price_cents: i64, stock: i64, category: &str, active: bool) -> Product {
        Product {
            id: ProductId(RecordId::from_raw(id)),
            name: format!("P{id}"),
            description: String::new(),
            price_cents,
            cost_cents: 0,
            category: category.to_string(),
            stock,
            sku: format!("SKU{id}"),
            status: if active {
                ProductStatus::Active
            } else {
                ProductStatus::Inactive
            },
            low_stock_threshold: 0,
        }
    }

    #[test]
    fn counts_split_by_status() {
        let products = [
            product(1, 100, 1, "A", true),
            product(2, 100, 1, "A", false),
            product(3, 100, 1, "B", true),
        ];
        assert_eq!(total_count(&products), 3);
        assert_eq!(active_count(&products), 2);
    }

    #[test]
    fn inventory_value_is_price_times_stock() {
        let products = [product(1, 2499, 5, "A", true), product(2, 8999, 25, "B", true)];
        assert_eq!(inventory_value_cents(&products), 2499 * 5 + 8999 * 25);
        assert_eq!(inventory_value_cents(&[]), 0);
    }

    #[test]
    fn categories_are_counted_once_each() {
        let products = [
            product(1, 0, 0, "Beverages", true),
            product(2, 0, 0, "Beverages", true),
            product(3, 0, 0, "Electronics", true),
        ];
        assert_eq!(distinct_categories(&products), 2);
    }

    #[test]
    fn metrics_are_idempotent_over_an_unchanged_snapshot() {
        let products = [product(1, 2499, 5, "A", true), product(2, 8999, 25, "B", false)];
        assert_eq!(inventory_value_cents(&products), inventory_value_cents(&products));
        assert_eq!(active_count(&products), active_count(&products));
        assert_eq!(distinct_categories(&products), distinct_categories(&products));
    }
}
