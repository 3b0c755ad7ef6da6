//! The `Storefront` facade tying the stores together.
//!
//! Constructed once at process start and injected into consumers;
//! cheaply cloneable via `Arc`. Exposes the merged product list, the
//! fetch status, and the cart as read models, and the command surface
//! as the only mutation entry points. Presentation stays outside this
//! crate.

use std::sync::Arc;

use tracing::instrument;

use shopfront_core::{CartItem, Product, ProductDraft, ProductId};

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::dialog::Commit;
use crate::error::{Result, StoreError};
use crate::overlay::{OverlayStore, merge};
use crate::products::{ProductsState, ProductsStore};

/// Shared storefront state: configuration, catalog client, and the
/// three state containers.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: StorefrontConfig,
    products: ProductsStore,
    cart: CartStore,
    overlay: OverlayStore,
}

impl Storefront {
    /// Build the storefront: catalog client against the configured base
    /// URL, products store empty, overlay rehydrated from disk, cart
    /// empty.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog_base_url);
        let overlay = OverlayStore::load(&config.overlay_path);

        Self {
            inner: Arc::new(StorefrontInner {
                products: ProductsStore::new(catalog),
                cart: CartStore::new(),
                overlay,
                config,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the remote products store.
    #[must_use]
    pub fn products(&self) -> &ProductsStore {
        &self.inner.products
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the local overlay store.
    #[must_use]
    pub fn overlay(&self) -> &OverlayStore {
        &self.inner.overlay
    }

    // =========================================================================
    // Read models
    // =========================================================================

    /// The displayed list: remote products followed by local products
    /// not shadowed by a remote id. Recomputed on every call.
    #[must_use]
    pub fn merged_products(&self) -> Vec<Product> {
        merge(
            &self.inner.products.snapshot().products,
            &self.inner.overlay.products(),
        )
    }

    /// Current remote-products state (list, loading flag, fetch error).
    #[must_use]
    pub fn products_state(&self) -> ProductsState {
        self.inner.products.snapshot()
    }

    /// Current cart lines.
    #[must_use]
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.inner.cart.items()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Refresh the remote product list.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; it is also recorded in the products
    /// state, and the previous list is kept.
    pub async fn refresh(&self) -> Result<()> {
        self.inner.products.fetch_all().await?;
        Ok(())
    }

    /// Execute a dialog commit.
    ///
    /// Create commits synthesize a fresh local id and append to the
    /// overlay only; they are never sent to the remote catalog. Update
    /// commits edit the overlay copy (when one exists) and, for
    /// remote-assigned ids, also push the update through the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay write or the remote update
    /// fails.
    #[instrument(skip(self, commit))]
    pub async fn commit(&self, commit: Commit) -> Result<Product> {
        match commit {
            Commit::Create(draft) => {
                let product = draft.into_product(ProductId::new_local());
                self.inner.overlay.push(product.clone())?;
                tracing::info!(id = %product.id, "local product created");
                Ok(product)
            }
            Commit::Update { id, draft } => {
                self.inner.overlay.apply_edit(&id, &draft)?;
                if id.is_local() {
                    // Nothing to tell the catalog about a local-only product.
                    Ok(draft.into_product(id))
                } else {
                    let updated = self.inner.products.update(&id, draft).await?;
                    Ok(updated)
                }
            }
        }
    }

    /// Create a product through the remote catalog.
    ///
    /// The demo catalog echoes the create without persisting it, so the
    /// result is appended to the in-memory products list but will be
    /// gone after the next fetch. Durable creation is the overlay path
    /// via [`Self::commit`].
    ///
    /// # Errors
    ///
    /// Returns the catalog error; the store is left unchanged.
    pub async fn create_remote(&self, draft: ProductDraft) -> Result<Product> {
        Ok(self.inner.products.create(draft).await?)
    }

    /// Delete a product everywhere it lives: the remote store for
    /// remote ids, and the overlay in all cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote delete or the overlay write
    /// fails; a failed remote delete leaves the overlay untouched.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<()> {
        if !id.is_local() {
            self.inner.products.delete(id).await?;
        }
        self.inner.overlay.remove(id)?;
        Ok(())
    }

    /// Snapshot the product with the given id from the merged list into
    /// the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such product is displayed.
    pub fn add_to_cart(&self, id: &ProductId) -> Result<CartItem> {
        let product = self
            .merged_products()
            .into_iter()
            .find(|p| p.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        self.inner.cart.add(product.clone());
        Ok(product)
    }

    /// Remove all cart lines with the given id.
    pub fn remove_from_cart(&self, id: &ProductId) {
        self.inner.cart.remove(id);
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.inner.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn storefront_with_overlay(dir: &tempfile::TempDir) -> Storefront {
        Storefront::new(StorefrontConfig {
            // Nothing listens here; network paths are not exercised.
            catalog_base_url: "http://127.0.0.1:1/products".to_string(),
            overlay_path: dir.path().join("overlay.json"),
        })
    }

    fn draft(title: &str, price: i64) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            price: Decimal::from(price),
            image: None,
            category: None,
        }
    }

    #[test]
    fn test_config_accessor() {
        let config = StorefrontConfig {
            catalog_base_url: "http://example.test/products".to_string(),
            overlay_path: PathBuf::from("/tmp/overlay.json"),
        };
        let storefront = Storefront::new(config);
        assert_eq!(
            storefront.config().catalog_base_url,
            "http://example.test/products"
        );
    }

    #[tokio::test]
    async fn test_local_create_then_cart_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storefront = storefront_with_overlay(&dir);

        let created = storefront
            .commit(Commit::Create(draft("B", 5)))
            .await
            .expect("local create");
        assert!(created.id.is_local());

        let merged = storefront.merged_products();
        assert_eq!(merged, vec![created.clone()]);

        let empty_before = storefront.cart_items();
        assert!(empty_before.is_empty());

        storefront.add_to_cart(&created.id).expect("in merged list");
        assert_eq!(storefront.cart_items().len(), 1);

        storefront.remove_from_cart(&created.id);
        assert_eq!(storefront.cart_items(), empty_before);
    }

    #[test]
    fn test_add_to_cart_unknown_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storefront = storefront_with_overlay(&dir);

        let err = storefront
            .add_to_cart(&ProductId::Remote(404))
            .expect_err("nothing displayed");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_overlay_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storefront = storefront_with_overlay(&dir);
        let created = storefront
            .commit(Commit::Create(draft("B", 5)))
            .await
            .expect("local create");

        let restarted = storefront_with_overlay(&dir);
        assert_eq!(restarted.merged_products(), vec![created]);
        // Cart state never survives a restart.
        assert!(restarted.cart_items().is_empty());
    }
}
