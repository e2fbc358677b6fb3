//! Product access service wiring catalogs, stores and proxies together.

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::adapters::memory::InMemoryProductStore;
use crate::adapters::proxy::AccessProxy;
use crate::domain::errors::DomainResult;
use crate::domain::models::{Config, ProductRecord, StoreKind};
use crate::services::catalog_registry::catalog_for;

type StoreProxy = AccessProxy<InMemoryProductStore>;

/// Routes product requests to the proxy for each store.
///
/// The physical store sits behind an open proxy; the digital store behind
/// a proxy gated on the configured access token.
pub struct ProductAccessService {
    physical: StoreProxy,
    digital: StoreProxy,
}

impl ProductAccessService {
    pub fn new(physical: StoreProxy, digital: StoreProxy) -> Self {
        Self { physical, digital }
    }

    /// Build stores from the catalog singletons and wrap them per config.
    pub fn from_config(config: &Config) -> Self {
        let latency = Duration::from_millis(config.store.latency_ms);
        let store = |kind: StoreKind| {
            Arc::new(
                InMemoryProductStore::from_catalog(kind.store_label(), catalog_for(kind))
                    .with_latency(latency),
            )
        };

        Self::new(
            AccessProxy::open(StoreKind::Physical.proxy_label(), store(StoreKind::Physical)),
            AccessProxy::token_gated(
                StoreKind::Digital.proxy_label(),
                store(StoreKind::Digital),
                config.proxy.access_token.clone(),
            ),
        )
    }

    pub const fn proxy(&self, kind: StoreKind) -> &StoreProxy {
        match kind {
            StoreKind::Physical => &self.physical,
            StoreKind::Digital => &self.digital,
        }
    }

    /// Number of lookups that reached the store behind `kind`.
    pub fn store_accesses(&self, kind: StoreKind) -> u64 {
        self.proxy(kind).inner().access_count()
    }

    #[instrument(skip(self, token), fields(store = %kind))]
    pub async fn fetch(
        &self,
        kind: StoreKind,
        sku: &str,
        token: &str,
    ) -> DomainResult<Option<ProductRecord>> {
        self.proxy(kind).fetch(sku, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ProductAccessService {
        let mut config = Config::default();
        config.store.latency_ms = 0;
        ProductAccessService::from_config(&config)
    }

    #[tokio::test]
    async fn test_physical_store_is_open() {
        let service = service();
        let record = service
            .fetch(StoreKind::Physical, "SKU-001", "")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.name, "Camiseta Polo");
    }

    #[tokio::test]
    async fn test_digital_store_requires_configured_token() {
        let mut config = Config::default();
        config.store.latency_ms = 0;
        config.proxy.access_token = "s3cret".to_string();
        let service = ProductAccessService::from_config(&config);

        assert!(service.fetch(StoreKind::Digital, "SKU-003", "valid-token").await.is_err());
        assert!(service
            .fetch(StoreKind::Digital, "SKU-003", "s3cret")
            .await
            .unwrap()
            .is_some());
        assert_eq!(service.store_accesses(StoreKind::Digital), 1);
    }

    #[tokio::test]
    async fn test_stores_are_disjoint() {
        let service = service();
        assert!(service
            .fetch(StoreKind::Physical, "SKU-003", "")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .fetch(StoreKind::Digital, "SKU-001", "valid-token")
            .await
            .unwrap()
            .is_none());
    }
}
