//! HTTP product source.

use async_trait::async_trait;
use carousel_core::{FetchError, Product, ProductSource};

/// Fetches the product list from a fixed JSON endpoint.
///
/// No query parameters, authentication or pagination; one GET per call.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = reqwest::get(&self.url)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}
