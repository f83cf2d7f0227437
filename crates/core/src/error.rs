//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable failures (validation,
/// missing records). Nothing here is fatal; callers surface these and carry
/// on. Arithmetic edge cases (empty averages, zero totals) are defined
/// results, not errors, and never appear in this enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation: missing/empty where required,
    /// negative where a non-negative number is required, or duplicating a
    /// collection-unique value. Carries every offending field name.
    #[error("validation failed: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    /// A requested record id or report period was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            fields: vec![field.into()],
        }
    }

    pub fn validation_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Offending field names, empty for non-validation errors.
    pub fn invalid_fields(&self) -> &[String] {
        match self {
            Self::Validation { fields } => fields,
            Self::NotFound => &[],
        }
    }
}
