//! Remote-fetched products store.
//!
//! Holds the product list together with its loading/error status and
//! exposes the four asynchronous CRUD operations. Each operation has
//! three observable outcomes (started, succeeded, failed) applied as
//! reducers on [`ProductsState`].
//!
//! Locking discipline: the state mutex is taken only to apply a
//! reducer, never across the network await. Between racing operations
//! the last response to resolve wins; there are no sequence numbers and
//! no cancellation.

use std::sync::{Mutex, MutexGuard};

use tracing::instrument;

use shopfront_core::{Product, ProductDraft, ProductId};

use crate::catalog::{CatalogClient, CatalogError};

/// Remote product list plus fetch status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsState {
    /// Products from the last successful fetch, plus applied mutations.
    pub products: Vec<Product>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Message of the last failed fetch; cleared by the next success.
    pub error: Option<String>,
}

impl ProductsState {
    fn apply_fetch_started(&mut self) {
        self.loading = true;
    }

    fn apply_fetch_succeeded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
        self.error = None;
    }

    /// `products` is left untouched on failure; no partial merge.
    fn apply_fetch_failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    fn apply_created(&mut self, product: Product) {
        self.products.push(product);
    }

    /// In-place replace; position in the sequence is preserved. An id
    /// with no match leaves the sequence unchanged.
    fn apply_updated(&mut self, product: Product) {
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
            *slot = product;
        }
    }

    fn apply_deleted(&mut self, id: &ProductId) {
        self.products.retain(|p| p.id != *id);
    }
}

// =============================================================================
// ProductsStore
// =============================================================================

/// State container for the remote product list.
///
/// Constructed once at startup and injected into consumers. Mutation
/// failures of create/update/delete are surfaced to the caller and
/// leave the state untouched; only a failed fetch records an error in
/// shared state.
pub struct ProductsStore {
    catalog: CatalogClient,
    state: Mutex<ProductsState>,
}

impl ProductsStore {
    /// Create an empty store backed by the given catalog client.
    #[must_use]
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog,
            state: Mutex::new(ProductsState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ProductsState> {
        self.state.lock().expect("products state lock poisoned")
    }

    /// Clone the current state as a read model.
    #[must_use]
    pub fn snapshot(&self) -> ProductsState {
        self.state().clone()
    }

    /// Fetch the full product list, replacing `products` wholesale on
    /// success. On failure the failure message lands in `error` and the
    /// previous products are kept.
    ///
    /// # Errors
    ///
    /// Returns the catalog error; it is also recorded in shared state.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<(), CatalogError> {
        self.state().apply_fetch_started();

        match self.catalog.list().await {
            Ok(products) => {
                self.state().apply_fetch_succeeded(products);
                Ok(())
            }
            Err(err) => {
                self.state().apply_fetch_failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Create a product remotely and append the server-returned product.
    ///
    /// Does not touch `loading` or `error`.
    ///
    /// # Errors
    ///
    /// Returns the catalog error; the store is left unchanged.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let created = self.catalog.create(&draft).await?;
        self.state().apply_created(created.clone());
        Ok(created)
    }

    /// Update a product remotely and replace the matching entry in
    /// place, keyed by the server-returned product's id.
    ///
    /// # Errors
    ///
    /// Returns the catalog error; the store is left unchanged.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update(
        &self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        let updated = self.catalog.update(id, &draft).await?;
        self.state().apply_updated(updated.clone());
        Ok(updated)
    }

    /// Delete a product remotely and remove all matching entries.
    ///
    /// # Errors
    ///
    /// Returns the catalog error; the store is left unchanged.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &ProductId) -> Result<(), CatalogError> {
        self.catalog.delete(id).await?;
        self.state().apply_deleted(id);
        Ok(())
    }
}
