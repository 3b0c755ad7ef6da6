//! In-memory session cart.
//!
//! Holds an ordered list of cart lines, each a full product snapshot
//! taken at add-time. Session-scoped: the cart starts empty and is
//! never persisted. All operations are synchronous and total.
//!
//! `add` does not deduplicate by id; adding the same product twice
//! yields two lines. Quantity is deliberately not modeled.

use std::sync::{Mutex, MutexGuard};

use shopfront_core::{CartItem, Product, ProductId};

/// State container for the session cart.
///
/// Reducers build a fresh list and swap it in rather than mutating a
/// retained one, so snapshots handed to readers are never changed
/// underneath them.
#[derive(Default)]
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<CartItem>> {
        self.items.lock().expect("cart lock poisoned")
    }

    /// Clone the current cart lines as a read model.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.guard().clone()
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Append a snapshot of `product` unconditionally.
    pub fn add(&self, product: Product) {
        let mut guard = self.guard();
        let mut next = guard.clone();
        next.push(product);
        *guard = next;
    }

    /// Remove all lines with the matching id.
    pub fn remove(&self, id: &ProductId) {
        let mut guard = self.guard();
        let next: Vec<CartItem> = guard.iter().filter(|p| p.id != *id).cloned().collect();
        *guard = next;
    }

    /// Empty the cart.
    pub fn clear(&self) {
        *self.guard() = Vec::new();
    }
}
