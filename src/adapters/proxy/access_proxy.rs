//! Caching, optionally token-gated proxy in front of a product subject.
//!
//! The proxy checks authorization first, then its cache, and only on a miss
//! forwards to the subject. Found products are cached for the lifetime of
//! the proxy; absent SKUs are never cached, so later requests retry.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::access_policy::AccessPolicy;
use crate::domain::errors::DomainResult;
use crate::domain::models::ProductRecord;
use crate::domain::ports::ProductSubject;

/// Access proxy decorator.
///
/// Wraps any `ProductSubject` with an unbounded moka cache keyed by SKU and
/// an [`AccessPolicy`]. The cache has no invalidation path: once a SKU is
/// cached, the subject is never asked for it again through this proxy.
pub struct AccessProxy<S: ProductSubject + ?Sized> {
    label: String,
    inner: Arc<S>,
    policy: AccessPolicy,
    /// Cache keyed by SKU -> ProductRecord.
    cache: Cache<String, Arc<ProductRecord>>,
}

impl<S: ProductSubject + ?Sized> AccessProxy<S> {
    pub fn new(label: impl Into<String>, inner: Arc<S>, policy: AccessPolicy) -> Self {
        Self {
            label: label.into(),
            inner,
            policy,
            cache: Cache::builder().build(),
        }
    }

    /// Create a proxy that caches but never rejects.
    pub fn open(label: impl Into<String>, inner: Arc<S>) -> Self {
        Self::new(label, inner, AccessPolicy::Open)
    }

    /// Create a proxy that requires `expected_token` on every request.
    pub fn token_gated(
        label: impl Into<String>,
        inner: Arc<S>,
        expected_token: impl Into<String>,
    ) -> Self {
        Self::new(label, inner, AccessPolicy::Token(expected_token.into()))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// The subject this proxy forwards to.
    pub fn inner(&self) -> &Arc<S> {
        &self.inner
    }

    /// Whether `sku` is already served from cache.
    pub fn is_cached(&self, sku: &str) -> bool {
        self.cache.contains_key(sku)
    }

    /// Fetch a product, authorizing `token` first.
    ///
    /// Returns `Ok(None)` when the subject has no such SKU and
    /// `DomainError::Unauthorized` when the policy rejects the token. A
    /// rejected request touches neither the cache nor the subject.
    #[instrument(skip(self, token), fields(proxy = %self.label))]
    pub async fn fetch(&self, sku: &str, token: &str) -> DomainResult<Option<ProductRecord>> {
        if let Err(err) = self.policy.authorize(&self.label, token) {
            warn!(proxy = %self.label, sku, "rejected request with invalid token");
            return Err(err);
        }

        if let Some(cached) = self.cache.get(sku).await {
            info!(proxy = %self.label, sku, "cache hit");
            return Ok(Some((*cached).clone()));
        }

        info!(proxy = %self.label, sku, "cache miss, calling subject");
        let result = self.inner.fetch(sku).await?;
        if let Some(ref record) = result {
            self.cache
                .insert(sku.to_string(), Arc::new(record.clone()))
                .await;
        }
        Ok(result)
    }
}

/// A proxy is itself a subject: requests through this interface carry an
/// empty token, so only open proxies serve them.
#[async_trait]
impl<S: ProductSubject + ?Sized + 'static> ProductSubject for AccessProxy<S> {
    async fn fetch(&self, sku: &str) -> DomainResult<Option<ProductRecord>> {
        Self::fetch(self, sku, "").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProductStore;
    use crate::domain::errors::DomainError;
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn store_a() -> Arc<InMemoryProductStore> {
        Arc::new(
            InMemoryProductStore::new(
                "store-a",
                vec![ProductRecord::new("SKU-001", "Camiseta Polo", Decimal::new(799, 1))],
            )
            .with_latency(Duration::ZERO),
        )
    }

    #[tokio::test]
    async fn test_second_fetch_is_cache_hit() {
        let store = store_a();
        let proxy = AccessProxy::open("physical-proxy", store.clone());

        let first = proxy.fetch("SKU-001", "").await.unwrap();
        assert!(proxy.is_cached("SKU-001"));
        let second = proxy.fetch("SKU-001", "").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.unwrap().price, Decimal::new(799, 1));
        assert_eq!(store.access_count(), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let store = store_a();
        let proxy = AccessProxy::open("physical-proxy", store.clone());

        assert!(proxy.fetch("SKU-404", "").await.unwrap().is_none());
        assert!(!proxy.is_cached("SKU-404"));
        assert!(proxy.fetch("SKU-404", "").await.unwrap().is_none());
        assert_eq!(store.access_count(), 2);
    }

    #[tokio::test]
    async fn test_open_proxy_ignores_token() {
        let proxy = AccessProxy::open("physical-proxy", store_a());
        assert!(proxy.fetch("SKU-001", "whatever").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_rejected_request_skips_cache_and_store() {
        let store = store_a();
        let proxy = AccessProxy::token_gated("digital-proxy", store.clone(), "valid-token");

        proxy.fetch("SKU-001", "valid-token").await.unwrap();
        assert!(proxy.is_cached("SKU-001"));

        let err = proxy.fetch("SKU-001", "bad-token").await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Unauthorized {
                proxy: "digital-proxy".to_string()
            }
        );
        assert_eq!(store.access_count(), 1);
    }

    #[tokio::test]
    async fn test_open_proxy_is_substitutable_for_subject() {
        let store = store_a();
        let proxy: Arc<dyn ProductSubject> = Arc::new(AccessProxy::open("outer", store.clone()));

        assert!(proxy.fetch("SKU-001").await.unwrap().is_some());
        assert!(proxy.fetch("SKU-001").await.unwrap().is_some());
        assert_eq!(store.access_count(), 1);
    }

    #[tokio::test]
    async fn test_gated_proxy_as_subject_is_unauthorized() {
        let proxy = AccessProxy::token_gated("digital-proxy", store_a(), "valid-token");
        let result = ProductSubject::fetch(&proxy, "SKU-001").await;
        assert!(result.unwrap_err().is_unauthorized());
    }
}
