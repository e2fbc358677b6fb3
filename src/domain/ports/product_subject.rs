//! Product subject port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::ProductRecord;

/// Capability to fetch a product record by SKU.
///
/// Absence is a normal outcome and is reported as `Ok(None)`.
#[async_trait]
pub trait ProductSubject: Send + Sync {
    /// Fetch the product with the given SKU.
    async fn fetch(&self, sku: &str) -> DomainResult<Option<ProductRecord>>;
}
