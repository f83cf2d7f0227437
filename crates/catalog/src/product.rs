use serde::{Deserialize, Serialize};

use tillpoint_core::search::{self, FieldSelector};
use tillpoint_core::{DomainError, DomainResult, RecordId, RecordStore, StoredRecord};

/// Product identifier, assigned by the catalog store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl From<RecordId> for ProductId {
    fn from(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product status lifecycle.
///
/// Active products are sellable; inactive ones stay in the catalog for
/// history but are hidden from the register. There is no other state and no
/// automatic transition; only an explicit update toggles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

/// Catalog entry.
///
/// Monetary fields are in the smallest currency unit (cents). Stock and the
/// low-stock threshold are whole units and never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub category: String,
    pub stock: i64,
    pub sku: String,
    pub status: ProductStatus,
    pub low_stock_threshold: i64,
}

impl Product {
    /// Whether stock has fallen to or below the replenishment threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    fn validate(&self) -> DomainResult<()> {
        let mut fields: Vec<String> = Vec::new();
        if self.name.trim().is_empty() {
            fields.push("name".into());
        }
        if self.sku.trim().is_empty() {
            fields.push("sku".into());
        }
        if self.category.trim().is_empty() {
            fields.push("category".into());
        }
        if self.price_cents < 0 {
            fields.push("price_cents".into());
        }
        if self.cost_cents < 0 {
            fields.push("cost_cents".into());
        }
        if self.stock < 0 {
            fields.push("stock".into());
        }
        if self.low_stock_threshold < 0 {
            fields.push("low_stock_threshold".into());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation { fields })
        }
    }
}

/// Creation input for [`Product`].
///
/// Unspecified stock-derived fields default to 0 and status defaults to
/// active. The id is assigned by the store and cannot be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub category: String,
    pub sku: String,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

/// Partial update for [`Product`]. Absent fields keep their current value;
/// the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub cost_cents: Option<i64>,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub stock: Option<i64>,
    pub low_stock_threshold: Option<i64>,
    pub status: Option<ProductStatus>,
}

impl StoredRecord for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_draft(id: ProductId, draft: ProductDraft) -> DomainResult<Self> {
        let product = Product {
            id,
            name: draft.name,
            description: draft.description,
            price_cents: draft.price_cents,
            cost_cents: draft.cost_cents,
            category: draft.category,
            stock: draft.stock.unwrap_or(0),
            sku: draft.sku,
            status: draft.status.unwrap_or(ProductStatus::Active),
            low_stock_threshold: draft.low_stock_threshold.unwrap_or(0),
        };
        product.validate()?;
        Ok(product)
    }

    fn apply_patch(&mut self, patch: ProductPatch) -> DomainResult<()> {
        let mut merged = self.clone();
        if let Some(name) = patch.name {
            merged.name = name;
        }
        if let Some(description) = patch.description {
            merged.description = description;
        }
        if let Some(price_cents) = patch.price_cents {
            merged.price_cents = price_cents;
        }
        if let Some(cost_cents) = patch.cost_cents {
            merged.cost_cents = cost_cents;
        }
        if let Some(category) = patch.category {
            merged.category = category;
        }
        if let Some(sku) = patch.sku {
            merged.sku = sku;
        }
        if let Some(stock) = patch.stock {
            merged.stock = stock;
        }
        if let Some(low_stock_threshold) = patch.low_stock_threshold {
            merged.low_stock_threshold = low_stock_threshold;
        }
        if let Some(status) = patch.status {
            merged.status = status;
        }
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    fn duplicate_key(&self, other: &Self) -> Option<&'static str> {
        (self.sku == other.sku).then_some("sku")
    }
}

/// Catalog store: products keyed by [`ProductId`], sku kept unique.
pub type ProductStore = RecordStore<Product>;

/// Searchable catalog fields, in match order: name, then sku.
const SEARCH_FIELDS: [FieldSelector<Product>; 2] = [
    |p: &Product| p.name.as_str(),
    |p: &Product| p.sku.as_str(),
];

/// Case-insensitive catalog search over name and sku.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    search::filter(products, query, &SEARCH_FIELDS)
}

/// Text search intersected with an exact category filter.
///
/// Passing [`search::CATEGORY_ALL`] as the category skips the category leg.
pub fn search_in_category<'a>(
    products: &'a [Product],
    query: &str,
    category: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| search::matches_query(*p, query, &SEARCH_FIELDS))
        .filter(|p| search::matches_category(&p.category, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_core::search::CATEGORY_ALL;

    fn coffee_draft() -> ProductDraft {
        ProductDraft {
            name: "Coffee Beans Premium".to_string(),
            description: "High-quality coffee beans from Colombia".to_string(),
            price_cents: 2499,
            cost_cents: 1500,
            category: "Beverages".to_string(),
            sku: "CB001".to_string(),
            stock: Some(5),
            low_stock_threshold: Some(20),
            status: None,
        }
    }

    fn headphones_draft() -> ProductDraft {
        ProductDraft {
            name: "Wireless Headphones".to_string(),
            description: String::new(),
            price_cents: 8999,
            cost_cents: 4500,
            category: "Electronics".to_string(),
            sku: "WH002".to_string(),
            stock: Some(25),
            low_stock_threshold: Some(10),
            status: None,
        }
    }

    #[test]
    fn add_fills_defaults_and_returns_record_with_id() {
        let mut store = ProductStore::new();
        let minimal = ProductDraft {
            name: "Paper Cups".to_string(),
            description: String::new(),
            price_cents: 350,
            cost_cents: 120,
            category: "Office".to_string(),
            sku: "PC010".to_string(),
            stock: None,
            low_stock_threshold: None,
            status: None,
        };
        let product = store.add(minimal).unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.low_stock_threshold, 0);
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(store.get(product.id).unwrap(), product);
    }

    #[test]
    fn validation_names_every_offending_field() {
        let mut store = ProductStore::new();
        let bad = ProductDraft {
            name: "  ".to_string(),
            description: String::new(),
            price_cents: -1,
            cost_cents: 0,
            category: String::new(),
            sku: "S1".to_string(),
            stock: Some(-4),
            low_stock_threshold: None,
            status: None,
        };
        let err = store.add(bad).unwrap_err();
        assert_eq!(
            err.invalid_fields(),
            ["name", "category", "price_cents", "stock"]
        );
    }

    #[test]
    fn sku_is_unique_within_the_catalog() {
        let mut store = ProductStore::new();
        store.add(coffee_draft()).unwrap();

        let mut dupe = headphones_draft();
        dupe.sku = "CB001".to_string();
        assert_eq!(store.add(dupe), Err(DomainError::validation("sku")));

        let other = store.add(headphones_draft()).unwrap();
        let steal = ProductPatch {
            sku: Some("CB001".to_string()),
            ..ProductPatch::default()
        };
        assert_eq!(
            store.update(other.id, steal),
            Err(DomainError::validation("sku"))
        );
    }

    #[test]
    fn update_merges_supplied_fields_only_and_never_the_id() {
        let mut store = ProductStore::new();
        let product = store.add(coffee_draft()).unwrap();

        let patch = ProductPatch {
            stock: Some(40),
            status: Some(ProductStatus::Inactive),
            ..ProductPatch::default()
        };
        let updated = store.update(product.id, patch).unwrap();

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.stock, 40);
        assert_eq!(updated.status, ProductStatus::Inactive);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.price_cents, product.price_cents);
    }

    #[test]
    fn update_revalidates_merged_numeric_fields() {
        let mut store = ProductStore::new();
        let product = store.add(coffee_draft()).unwrap();
        let patch = ProductPatch {
            cost_cents: Some(-500),
            ..ProductPatch::default()
        };
        let err = store.update(product.id, patch).unwrap_err();
        assert_eq!(err.invalid_fields(), ["cost_cents"]);
        assert_eq!(store.get(product.id).unwrap(), product);
    }

    #[test]
    fn search_covers_name_and_sku_case_insensitively() {
        let mut store = ProductStore::new();
        store.add(coffee_draft()).unwrap();
        store.add(headphones_draft()).unwrap();
        let snapshot = store.list();

        let by_name = search(&snapshot, "coffee");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].sku, "CB001");

        let by_sku = search(&snapshot, "wh00");
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].name, "Wireless Headphones");

        assert_eq!(search(&snapshot, "").len(), 2);
    }

    #[test]
    fn category_filter_intersects_with_text_search() {
        let mut store = ProductStore::new();
        store.add(coffee_draft()).unwrap();
        store.add(headphones_draft()).unwrap();
        let snapshot = store.list();

        let hits = search_in_category(&snapshot, "e", "Beverages");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Beverages");

        assert_eq!(search_in_category(&snapshot, "", CATEGORY_ALL).len(), 2);
        assert!(search_in_category(&snapshot, "", "beverages").is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        let mut store = ProductStore::new();
        let product = store.add(coffee_draft()).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["id"], 1);
    }
}
