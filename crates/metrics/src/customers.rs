//! Customer statistics: revenue, order averages, loyalty totals.

use tillpoint_customers::Customer;

/// Number of customers in the snapshot.
pub fn total_count(customers: &[Customer]) -> usize {
    customers.len()
}

/// Number of active customers.
pub fn active_count(customers: &[Customer]) -> usize {
    customers.iter().filter(|c| c.is_active()).count()
}

/// Total recorded revenue in cents: Σ total_spent.
pub fn total_revenue_cents(customers: &[Customer]) -> i64 {
    customers.iter().map(|c| c.total_spent_cents).sum()
}

/// Fleet-wide average order value in cents: Σ total_spent / Σ total_orders.
///
/// Defined as 0 when no orders have been recorded, never NaN and never an
/// error.
pub fn average_order_value_cents(customers: &[Customer]) -> f64 {
    let orders: i64 = customers.iter().map(|c| c.total_orders).sum();
    if orders == 0 {
        return 0.0;
    }
    total_revenue_cents(customers) as f64 / orders as f64
}

/// Total loyalty points across all customers.
pub fn total_loyalty_points(customers: &[Customer]) -> i64 {
    customers.iter().map(|c| c.loyalty_points).sum()
}
