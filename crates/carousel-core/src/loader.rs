//! Product loading: local cache first, remote source otherwise.

use async_trait::async_trait;

use crate::{FetchError, KvBackend, Product, Store, StructuredLogger};

/// Remote source of the product list.
///
/// Browser futures are not `Send`, so neither are implementations.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Fetch the complete product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Result of [`load_products`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// Served from the cache; no request was made.
    Cached(Vec<Product>),
    /// Fetched from the source and written to the cache.
    Fetched(Vec<Product>),
    /// The fetch failed; nothing to render.
    Failed(FetchError),
}

impl LoadOutcome {
    /// Products to render. Empty on failure.
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Cached(products) | Self::Fetched(products) => products,
            Self::Failed(_) => &[],
        }
    }

    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Cached(products) | Self::Fetched(products) => products,
            Self::Failed(_) => Vec::new(),
        }
    }

    /// Label for logs.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::Cached(_) => "cache",
            Self::Fetched(_) => "network",
            Self::Failed(_) => "none",
        }
    }
}

/// Load the product list.
///
/// A non-empty list cached under `key` is returned as is. Otherwise the list
/// is fetched from `source` and cached. The cache never expires; it is only
/// refreshed once it is cleared. Failures are logged and never retried.
pub async fn load_products<B, S>(
    store: &Store<B>,
    source: &S,
    key: &str,
    logger: &StructuredLogger,
) -> LoadOutcome
where
    B: KvBackend,
    S: ProductSource + ?Sized,
{
    let cached: Vec<Product> = store.get_or_default(key);
    if !cached.is_empty() {
        logger
            .debug_builder("Products served from cache")
            .field_i64("count", cached.len() as i64)
            .emit();
        return LoadOutcome::Cached(cached);
    }

    let products = match source.fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            logger
                .error_builder("Failed to fetch products")
                .field("error", e.to_string())
                .emit();
            return LoadOutcome::Failed(e);
        }
    };

    if let Err(e) = store.set(key, &products) {
        logger
            .warn_builder("Failed to cache products")
            .field("key", key)
            .field("error", e.to_string())
            .emit();
    }

    logger
        .info_builder("Products fetched")
        .field_i64("count", products.len() as i64)
        .emit();

    LoadOutcome::Fetched(products)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::{LogLevel, MemoryBackend, ProductId};

    struct FakeSource {
        result: fn() -> Result<Vec<Product>, FetchError>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(result: fn() -> Result<Vec<Product>, FetchError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProductSource for FakeSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Product {}", id),
            price: 100.0 + id as f64,
            img: format!("https://cdn.example.com/{}.jpg", id),
            url: format!("https://shop.example.com/p/{}", id),
        }
    }

    fn catalog() -> Result<Vec<Product>, FetchError> {
        Ok((1..=5).map(product).collect())
    }

    fn offline() -> Result<Vec<Product>, FetchError> {
        Err(FetchError::Connection("network unreachable".to_string()))
    }

    fn logger() -> StructuredLogger {
        StructuredLogger::new("test").with_min_level(LogLevel::Error)
    }

    #[test]
    fn test_empty_cache_fetches_and_caches() {
        let backend = MemoryBackend::new();
        let store = Store::new(backend.clone());
        let source = FakeSource::new(catalog);

        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert!(matches!(outcome, LoadOutcome::Fetched(_)));
        assert_eq!(outcome.products().len(), 5);
        assert_eq!(source.calls.get(), 1);

        let cached: Vec<Product> = store.get("products").unwrap().unwrap();
        assert_eq!(cached, outcome.into_products());
    }

    #[test]
    fn test_cached_products_skip_network() {
        let store = Store::new(MemoryBackend::new());
        let cached: Vec<Product> = vec![product(10), product(11)];
        store.set("products", &cached).unwrap();
        let source = FakeSource::new(catalog);

        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert!(matches!(outcome, LoadOutcome::Cached(_)));
        assert_eq!(outcome.products(), cached.as_slice());
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_second_load_uses_cache() {
        let store = Store::new(MemoryBackend::new());
        let source = FakeSource::new(catalog);

        block_on(load_products(&store, &source, "products", &logger()));
        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert_eq!(outcome.source_name(), "cache");
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_empty_cached_list_refetches() {
        let store = Store::new(MemoryBackend::new().with_entry("products", "[]"));
        let source = FakeSource::new(catalog);

        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert_eq!(outcome.source_name(), "network");
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_corrupt_cache_refetches() {
        let store = Store::new(MemoryBackend::new().with_entry("products", "[{\"id\": 1,"));
        let source = FakeSource::new(catalog);

        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert_eq!(outcome.products().len(), 5);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_fetch_failure_leaves_cache_empty() {
        let store = Store::new(MemoryBackend::new());
        let source = FakeSource::new(offline);

        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert!(matches!(outcome, LoadOutcome::Failed(FetchError::Connection(_))));
        assert!(outcome.products().is_empty());
        assert!(store.backend().raw("products").is_none());
    }

    #[test]
    fn test_cache_write_failure_still_renders() {
        let store = Store::new(MemoryBackend::new().read_only());
        let source = FakeSource::new(catalog);

        let outcome = block_on(load_products(&store, &source, "products", &logger()));

        assert_eq!(outcome.products().len(), 5);
    }
}
