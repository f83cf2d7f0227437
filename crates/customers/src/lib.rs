//! Customers module.
//!
//! This crate contains the customer entity and its validation, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{
    Customer, CustomerDraft, CustomerId, CustomerPatch, CustomerStatus, CustomerStore, search,
};
