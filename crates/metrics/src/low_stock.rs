//! Low-stock monitor: products at or below their replenishment threshold,
//! most critical first.

use serde::{Deserialize, Serialize};

use tillpoint_catalog::Product;

/// A product needing replenishment.
///
/// `ratio` is stock relative to the product's own threshold, clamped to
/// [0, 1]: 0 means empty (or a zero threshold, which counts as always
/// critical), 1 means exactly at the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub product: Product,
    pub ratio: f64,
}

/// Every product with stock ≤ threshold, most critical first.
///
/// Ordering is ascending by ratio, ties broken by ascending stock, then by
/// product id, so repeated calls over the same snapshot agree exactly.
pub fn low_stock_items(products: &[Product]) -> Vec<LowStockItem> {
    let mut items: Vec<LowStockItem> = products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| LowStockItem {
            product: p.clone(),
            ratio: stock_ratio(p),
        })
        .collect();
    items.sort_by(|a, b| {
        a.ratio
            .total_cmp(&b.ratio)
            .then_with(|| a.product.stock.cmp(&b.product.stock))
            .then_with(|| a.product.id.cmp(&b.product.id))
    });
    items
}

/// Number of products at or below their threshold.
pub fn low_stock_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.is_low_stock()).count()
}

fn stock_ratio(product: &Product) -> f64 {
    if product.low_stock_threshold == 0 {
        return 0.0;
    }
    (product.stock as f64 / product.low_stock_threshold as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_catalog::{ProductId, ProductStatus};
    use tillpoint_core::RecordId;

    fn product(id: u64, stock: i64, threshold: i64) -> Product {
        Product {
            id: ProductId(RecordId::from_raw(id)),
            name: format!("P{id}"),
            description: String::new(),
            price_cents: 100,
            cost_cents: 50,
            category: "General".to_string(),
            stock,
            sku: format!("SKU{id}"),
            status: ProductStatus::Active,
            low_stock_threshold: threshold,
        }
    }

    #[test]
    fn membership_follows_the_threshold_comparison() {
        let products = [product(1, 5, 20), product(2, 25, 20), product(3, 20, 20)];
        let items = low_stock_items(&products);
        let ids: Vec<u64> = items.iter().map(|i| i.product.id.0.raw()).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(low_stock_count(&products), items.len());
    }

    #[test]
    fn ratio_is_stock_over_threshold() {
        let items = low_stock_items(&[product(1, 5, 20)]);
        assert_eq!(items[0].ratio, 0.25);
    }

    #[test]
    fn zero_threshold_counts_as_always_critical() {
        let products = [product(1, 0, 0), product(2, 3, 15)];
        let items = low_stock_items(&products);
        assert_eq!(items[0].product.id.0.raw(), 1);
        assert_eq!(items[0].ratio, 0.0);
        assert!(!items[0].ratio.is_nan());
    }

    #[test]
    fn most_critical_first_with_deterministic_tie_breaks() {
        let products = [
            product(4, 10, 20), // ratio 0.5
            product(3, 5, 10),  // ratio 0.5, lower stock
            product(2, 1, 10),  // ratio 0.1
            product(5, 5, 10),  // ratio 0.5, same stock as id 3
        ];
        let items = low_stock_items(&products);
        let ids: Vec<u64> = items.iter().map(|i| i.product.id.0.raw()).collect();
        assert_eq!(ids, [2, 3, 5, 4]);
    }

    #[test]
    fn well_stocked_catalog_raises_nothing() {
        let products = [product(1, 100, 20)];
        assert!(low_stock_items(&products).is_empty());
        assert_eq!(low_stock_count(&products), 0);
    }

    #[test]
    fn repeated_calls_agree_exactly() {
        let products = [product(1, 5, 20), product(2, 0, 0)];
        assert_eq!(low_stock_items(&products), low_stock_items(&products));
    }
}
