//! HTTP client for the product catalog endpoint.

use std::sync::Arc;

use shopcart_core::Product;
use tracing::instrument;
use url::Url;

use super::CatalogError;
use crate::config::CatalogConfig;

/// Client for the remote product catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.url.clone(),
            }),
        })
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails, the endpoint answers with
    /// a non-success status, or the body is not a JSON array of products.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Read as text first so parse failures can log the payload
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let products: Vec<Product> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })?;

        tracing::debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}
