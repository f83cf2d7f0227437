//! `tillpoint-metrics` — derived statistics over catalog and customer
//! snapshots.
//!
//! Every function in this crate is a pure function of its input snapshot:
//! no hidden state, no clock, no IO. Calling one twice on the same snapshot
//! yields identical results, and division-by-zero cases are defined to be 0
//! rather than errors.

pub mod catalog;
pub mod customers;
pub mod low_stock;

pub use low_stock::{LowStockItem, low_stock_count, low_stock_items};
