use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tillpoint_core::search::{self, FieldSelector};
use tillpoint_core::{DomainError, DomainResult, RecordId, RecordStore, StoredRecord};

/// Customer identifier, assigned by the customer store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub RecordId);

impl From<RecordId> for CustomerId {
    fn from(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer status, toggled only by explicit updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// Customer record.
///
/// `total_spent_cents` is monetary (smallest currency unit); orders and
/// loyalty points are whole counts. All three are never negative.
/// `last_visit` is supplied by the caller; this core reads no clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub total_spent_cents: i64,
    pub total_orders: i64,
    pub last_visit: NaiveDate,
    pub loyalty_points: i64,
    pub status: CustomerStatus,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }

    fn validate(&self) -> DomainResult<()> {
        let mut fields: Vec<String> = Vec::new();
        if self.name.trim().is_empty() {
            fields.push("name".into());
        }
        if self.total_spent_cents < 0 {
            fields.push("total_spent_cents".into());
        }
        if self.total_orders < 0 {
            fields.push("total_orders".into());
        }
        if self.loyalty_points < 0 {
            fields.push("loyalty_points".into());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation { fields })
        }
    }
}

/// Creation input for [`Customer`].
///
/// A brand-new customer starts with zero spend, zero orders, and zero
/// loyalty points unless figures are supplied (e.g. when importing an
/// existing book of customers); status defaults to active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
    pub last_visit: NaiveDate,
    #[serde(default)]
    pub total_spent_cents: Option<i64>,
    #[serde(default)]
    pub total_orders: Option<i64>,
    #[serde(default)]
    pub loyalty_points: Option<i64>,
    #[serde(default)]
    pub status: Option<CustomerStatus>,
}

/// Partial update for [`Customer`]. Absent fields keep their current value;
/// the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub last_visit: Option<NaiveDate>,
    pub total_spent_cents: Option<i64>,
    pub total_orders: Option<i64>,
    pub loyalty_points: Option<i64>,
    pub status: Option<CustomerStatus>,
}

impl StoredRecord for Customer {
    type Id = CustomerId;
    type Draft = CustomerDraft;
    type Patch = CustomerPatch;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn from_draft(id: CustomerId, draft: CustomerDraft) -> DomainResult<Self> {
        let customer = Customer {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            notes: draft.notes,
            total_spent_cents: draft.total_spent_cents.unwrap_or(0),
            total_orders: draft.total_orders.unwrap_or(0),
            last_visit: draft.last_visit,
            loyalty_points: draft.loyalty_points.unwrap_or(0),
            status: draft.status.unwrap_or(CustomerStatus::Active),
        };
        customer.validate()?;
        Ok(customer)
    }

    fn apply_patch(&mut self, patch: CustomerPatch) -> DomainResult<()> {
        let mut merged = self.clone();
        if let Some(name) = patch.name {
            merged.name = name;
        }
        if let Some(email) = patch.email {
            merged.email = email;
        }
        if let Some(phone) = patch.phone {
            merged.phone = phone;
        }
        if let Some(address) = patch.address {
            merged.address = address;
        }
        if let Some(notes) = patch.notes {
            merged.notes = notes;
        }
        if let Some(last_visit) = patch.last_visit {
            merged.last_visit = last_visit;
        }
        if let Some(total_spent_cents) = patch.total_spent_cents {
            merged.total_spent_cents = total_spent_cents;
        }
        if let Some(total_orders) = patch.total_orders {
            merged.total_orders = total_orders;
        }
        if let Some(loyalty_points) = patch.loyalty_points {
            merged.loyalty_points = loyalty_points;
        }
        if let Some(status) = patch.status {
            merged.status = status;
        }
        merged.validate()?;
        *self = merged;
        Ok(())
    }
}

/// Customer store: customers keyed by [`CustomerId`].
pub type CustomerStore = RecordStore<Customer>;

/// Searchable customer fields, in match order: name, email, phone.
const SEARCH_FIELDS: [FieldSelector<Customer>; 3] = [
    |c: &Customer| c.name.as_str(),
    |c: &Customer| c.email.as_str(),
    |c: &Customer| c.phone.as_str(),
];

/// Case-insensitive customer search over name, email, and phone.
pub fn search<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    search::filter(customers, query, &SEARCH_FIELDS)
}
