//! Domain errors for the storefront.

use thiserror::Error;

/// Domain-level errors that can occur while serving product requests.
///
/// A missing product is not an error: lookups report absence as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unauthorized: invalid token for {proxy}")]
    Unauthorized { proxy: String },

    #[error("Invalid metadata value for '{key}': {value}")]
    InvalidMetadata { key: String, value: String },

    #[error("Price calculation overflowed for {sku}")]
    PriceOverflow { sku: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether this error is an access-control rejection.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
