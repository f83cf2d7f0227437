//! Product catalog module.
//!
//! This crate contains the product entity and its validation, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{
    Product, ProductDraft, ProductId, ProductPatch, ProductStatus, ProductStore, search,
    search_in_category,
};
