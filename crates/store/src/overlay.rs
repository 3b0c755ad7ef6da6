//! Locally-created products: overlay store and merge.
//!
//! The demo catalog never persists writes server-side, so products the
//! user creates or edits live in a JSON overlay file and are merged
//! into the displayed list on every read. The overlay is the durable
//! source of truth for any product that never round-tripped through the
//! remote API.
//!
//! Persistence is a full-snapshot rewrite on every mutation: the whole
//! overlay is serialized to a temporary file and renamed into place, so
//! the write is atomic from the caller's perspective and idempotent.
//! A missing or unreadable file at load time means "no local products
//! yet", never a fatal error.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::{debug, warn};

use shopfront_core::{Product, ProductDraft, ProductId};

/// Errors writing the overlay file. Read failures are recovered
/// locally and never surfaced.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Filesystem failure while writing the snapshot.
    #[error("I/O error writing overlay: {0}")]
    Io(#[from] std::io::Error),

    /// The overlay could not be serialized.
    #[error("failed to serialize overlay: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Merge remote products with the local overlay.
///
/// Returns `remote` followed by every element of `local` whose id is
/// not present in `remote`; the remote copy wins for a shared id and
/// relative order is preserved within each source. Pure and recomputed
/// on every read, never cached. Duplicate ids inside `local` itself are
/// an input-validity assumption, not corrected here.
#[must_use]
pub fn merge(remote: &[Product], local: &[Product]) -> Vec<Product> {
    let mut merged = remote.to_vec();
    merged.extend(
        local
            .iter()
            .filter(|l| !remote.iter().any(|r| r.id == l.id))
            .cloned(),
    );
    merged
}

// =============================================================================
// OverlayStore
// =============================================================================

/// Durable store of locally-created products.
///
/// Loaded once at construction; every mutation rewrites the file.
pub struct OverlayStore {
    path: PathBuf,
    products: Mutex<Vec<Product>>,
}

impl OverlayStore {
    /// Load the overlay from `path`.
    ///
    /// A missing file or a file that fails to deserialize yields an
    /// empty overlay; the latter is logged at `warn`.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let products = read_overlay(&path);
        debug!(path = %path.display(), count = products.len(), "overlay loaded");
        Self {
            path,
            products: Mutex::new(products),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().expect("overlay lock poisoned")
    }

    /// Clone the current overlay as a read model.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.guard().clone()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a locally-created product and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written; the
    /// in-memory overlay is left unchanged in that case.
    pub fn push(&self, product: Product) -> Result<(), OverlayError> {
        let mut guard = self.guard();
        let mut next = guard.clone();
        next.push(product);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    /// Field-merge a draft over the matching entry, id and position
    /// preserved, and persist. An id with no match is a no-op apart
    /// from the (idempotent) rewrite.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn apply_edit(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), OverlayError> {
        let mut guard = self.guard();
        let next: Vec<Product> = guard
            .iter()
            .map(|p| {
                if p.id == *id {
                    draft.clone().into_product(p.id.clone())
                } else {
                    p.clone()
                }
            })
            .collect();
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    /// Remove all entries with the given id and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn remove(&self, id: &ProductId) -> Result<(), OverlayError> {
        let mut guard = self.guard();
        let next: Vec<Product> = guard.iter().filter(|p| p.id != *id).cloned().collect();
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    /// Empty the overlay and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn clear(&self) -> Result<(), OverlayError> {
        let mut guard = self.guard();
        self.persist(&[])?;
        guard.clear();
        Ok(())
    }

    /// Write the full snapshot: serialize to a sibling temp file, then
    /// rename over the target.
    fn persist(&self, products: &[Product]) -> Result<(), OverlayError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(products)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Read and deserialize the overlay, degrading to empty on any failure.
fn read_overlay(path: &Path) -> Vec<Product> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "overlay unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(products) => products,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "overlay corrupt, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: ProductId, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: Decimal::from(5),
            image: None,
            category: None,
        }
    }

    fn remote(id: i64, title: &str) -> Product {
        product(ProductId::Remote(id), title)
    }

    fn local(id: &str, title: &str) -> Product {
        product(ProductId::Local(id.to_string()), title)
    }

    #[test]
    fn test_merge_remote_wins_for_shared_id() {
        let remote_list = vec![remote(1, "fresh")];
        let local_list = vec![remote(1, "stale"), local("local-2", "B")];

        let merged = merge(&remote_list, &local_list);
        assert_eq!(merged, vec![remote(1, "fresh"), local("local-2", "B")]);
    }

    #[test]
    fn test_merge_preserves_order_within_sources() {
        let remote_list = vec![remote(1, "A"), remote(2, "B")];
        let local_list = vec![local("local-1", "X"), local("local-2", "Y")];

        let merged = merge(&remote_list, &local_list);
        let titles: Vec<&str> = merged.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "X", "Y"]);
    }

    #[test]
    fn test_merge_deterministic_on_unchanged_inputs() {
        let remote_list = vec![remote(1, "A")];
        let local_list = vec![local("local-1", "B")];

        assert_eq!(
            merge(&remote_list, &local_list),
            merge(&remote_list, &local_list)
        );
    }

    #[test]
    fn test_merge_empty_inputs() {
        assert!(merge(&[], &[]).is_empty());
        let only_local = merge(&[], &[local("local-1", "B")]);
        assert_eq!(only_local, vec![local("local-1", "B")]);
    }

    #[test]
    fn test_push_persists_and_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("overlay.json");

        let store = OverlayStore::load(&path);
        store.push(local("local-1", "B")).expect("push");

        let reloaded = OverlayStore::load(&path);
        assert_eq!(reloaded.products(), vec![local("local-1", "B")]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::load(dir.path().join("nope.json"));
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("overlay.json");
        fs::write(&path, "{ not json").expect("write");

        let store = OverlayStore::load(&path);
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_apply_edit_replaces_fields_keeps_position() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::load(dir.path().join("overlay.json"));
        store.push(local("local-1", "A")).expect("push");
        store.push(local("local-2", "B")).expect("push");

        let draft = ProductDraft {
            title: "A2".to_string(),
            price: Decimal::from(7),
            image: None,
            category: Some("Clothing".to_string()),
        };
        store
            .apply_edit(&ProductId::Local("local-1".to_string()), &draft)
            .expect("edit");

        let products = store.products();
        assert_eq!(products.len(), 2);
        assert_eq!(products.first().map(|p| p.title.as_str()), Some("A2"));
        assert_eq!(
            products.first().and_then(|p| p.category.as_deref()),
            Some("Clothing")
        );
        assert_eq!(products.last().map(|p| p.title.as_str()), Some("B"));
    }

    #[test]
    fn test_apply_edit_unknown_id_is_noop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::load(dir.path().join("overlay.json"));
        store.push(local("local-1", "A")).expect("push");

        let draft = ProductDraft::default();
        store
            .apply_edit(&ProductId::Local("local-9".to_string()), &draft)
            .expect("edit");
        assert_eq!(store.products(), vec![local("local-1", "A")]);
    }

    #[test]
    fn test_remove_then_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("overlay.json");
        let store = OverlayStore::load(&path);
        store.push(local("local-1", "A")).expect("push");
        store.push(local("local-2", "B")).expect("push");

        store
            .remove(&ProductId::Local("local-1".to_string()))
            .expect("remove");

        let reloaded = OverlayStore::load(&path);
        assert_eq!(reloaded.products(), vec![local("local-2", "B")]);
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("overlay.json");
        let store = OverlayStore::load(&path);
        store.push(local("local-1", "A")).expect("push");

        store.clear().expect("clear");
        assert!(store.products().is_empty());
        assert!(OverlayStore::load(&path).products().is_empty());
    }
}
