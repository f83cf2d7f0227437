//! Record trait: identity plus draft/patch materialization.

use core::fmt;
use core::hash::Hash;

use crate::error::DomainResult;
use crate::id::RecordId;

/// Implemented by entity types managed by a [`RecordStore`](crate::RecordStore).
///
/// The store owns id assignment, ordering, and collection-scoped uniqueness;
/// the entity owns field-level validation. `from_draft` and `apply_patch`
/// must reject bad input with a `Validation` error naming every offending
/// field, and must leave the id untouched (patches cannot carry one).
pub trait StoredRecord: Clone + fmt::Debug {
    /// Strongly-typed record identifier.
    type Id: Copy + Eq + Ord + Hash + fmt::Debug + From<RecordId>;

    /// Creation input: the record minus its id. Optional fields fall back to
    /// documented defaults when absent.
    type Draft;

    /// Update input: every field optional; absent fields keep their value.
    type Patch;

    fn id(&self) -> Self::Id;

    /// Materialize a full record from a draft and a store-assigned id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> DomainResult<Self>;

    /// Merge the supplied fields into `self`, re-validating the result.
    fn apply_patch(&mut self, patch: Self::Patch) -> DomainResult<()>;

    /// Name of a collection-unique field that `other` duplicates, if any.
    ///
    /// Checked by the store on every add and update against the rest of the
    /// collection. The default is no uniqueness beyond the id.
    fn duplicate_key(&self, _other: &Self) -> Option<&'static str> {
        None
    }
}
