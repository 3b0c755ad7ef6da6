//! Catalog API client.
//!
//! A thin REST wrapper over the remote catalog's CRUD-shaped endpoints.
//! Responses are read as text first and parsed separately so decode
//! failures carry the offending body in the logs.
//!
//! The demo catalog echoes writes without persisting them server-side;
//! callers must not assume durability of anything but `list`. There are
//! no retries, no caching, and no timeout policy beyond the HTTP
//! client's default.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use shopfront_core::{Product, ProductDraft, ProductId};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of the catalog's list endpoint.
#[derive(Debug, Deserialize)]
struct ProductListBody {
    products: Vec<Product>,
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote catalog API.
///
/// Cheaply cloneable; the underlying `reqwest::Client` connection pool
/// is shared.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client against a fixed base URL.
    ///
    /// A trailing slash on `base_url` is tolerated.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_owned(),
            }),
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Send a request and decode the JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = request.send().await?;
        let status = response.status();

        // Read as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            tracing::error!(
                error = %err,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(err)
        })
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decode fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let body: ProductListBody = self
            .execute(self.inner.client.get(&self.inner.base_url))
            .await?;
        Ok(body.products)
    }

    /// Create a product; the catalog echoes it back with an assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decode fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        let url = format!("{}/add", self.inner.base_url);
        self.execute(self.inner.client.post(url).json(draft)).await
    }

    /// Update a product; the catalog echoes the updated product back.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decode fails, including
    /// a 404 for an id the catalog does not know.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, CatalogError> {
        let url = format!("{}/{id}", self.inner.base_url);
        self.execute(self.inner.client.put(url).json(draft)).await
    }

    /// Delete a product.
    ///
    /// The catalog acknowledges without actually deleting server-side;
    /// the acknowledgement body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is
    /// non-success.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &ProductId) -> Result<(), CatalogError> {
        let url = format!("{}/{id}", self.inner.base_url);
        let response = self.inner.client.delete(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "catalog delete returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = CatalogClient::new("https://dummyjson.com/products/");
        assert_eq!(client.base_url(), "https://dummyjson.com/products");
    }

    #[test]
    fn test_status_error_display() {
        let err = CatalogError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "{\"message\":\"not found\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "catalog returned 404 Not Found: {\"message\":\"not found\"}"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err =
            serde_json::from_str::<ProductListBody>("not json").expect_err("must fail");
        let err = CatalogError::Parse(parse_err);
        assert!(err.to_string().starts_with("JSON parse error:"));
    }

    #[test]
    fn test_list_body_shape() {
        let body: ProductListBody =
            serde_json::from_str(r#"{"products":[{"id":1,"title":"A","price":10}],"total":1}"#)
                .expect("valid body");
        assert_eq!(body.products.len(), 1);
    }
}
