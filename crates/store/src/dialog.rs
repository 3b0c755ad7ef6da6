//! Create/edit dialog state machine.
//!
//! The dialog is UI-adjacent but behaviorally relevant: its transitions
//! are synchronous command functions, and saving yields a [`Commit`]
//! describing the state change to apply rather than performing any I/O
//! itself. The [`Storefront`](crate::state::Storefront) facade executes
//! commits.
//!
//! States: `Closed`, `Create { draft }`, `Edit { id, draft }`. Opening
//! in create mode resets the draft to empty defaults; opening in edit
//! mode seeds it from the product. Cancel discards the draft
//! unconditionally.

use shopfront_core::{Product, ProductDraft, ProductId};

/// Category choices offered by the product form.
pub const CATEGORY_CHOICES: &[&str] = &["Electronics", "Clothing"];

/// Command produced by a dialog save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Create a new local product from the draft.
    Create(ProductDraft),
    /// Apply the draft to the product with the given id.
    Update { id: ProductId, draft: ProductDraft },
}

/// The create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    /// No dialog shown.
    #[default]
    Closed,
    /// Creating a new product.
    Create { draft: ProductDraft },
    /// Editing an existing product.
    Edit { id: ProductId, draft: ProductDraft },
}

impl DialogState {
    /// Open in create mode with an empty draft.
    pub fn open_create(&mut self) {
        *self = Self::Create {
            draft: ProductDraft::default(),
        };
    }

    /// Open in edit mode, seeding the draft from `product`.
    pub fn open_edit(&mut self, product: Product) {
        let id = product.id.clone();
        *self = Self::Edit {
            id,
            draft: ProductDraft::from(product),
        };
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Mutable access to the draft while the dialog is open.
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match self {
            Self::Closed => None,
            Self::Create { draft } | Self::Edit { draft, .. } => Some(draft),
        }
    }

    /// Commit the draft and close.
    ///
    /// Returns `None` when the dialog is already closed.
    pub fn save(&mut self) -> Option<Commit> {
        match std::mem::take(self) {
            Self::Closed => None,
            Self::Create { draft } => Some(Commit::Create(draft)),
            Self::Edit { id, draft } => Some(Commit::Update { id, draft }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
            id: ProductId::Remote(4),
            title: "Lamp".to_string(),
            price: Decimal::from(20),
            image: Some("lamp.png".to_string()),
            category: Some("Electronics".to_string()),
        }
    }

    #[test]
    fn test_open_create_resets_draft() {
        let mut dialog = DialogState::default();
        dialog.open_edit(product());
        dialog.open_create();

        assert_eq!(
            dialog,
            DialogState::Create {
                draft: ProductDraft::default()
            }
        );
    }

    #[test]
    fn test_open_edit_seeds_draft() {
        let mut dialog = DialogState::default();
        dialog.open_edit(product());

        let Some(draft) = dialog.draft_mut() else {
            panic!("dialog should be open");
        };
        assert_eq!(draft.title, "Lamp");
        assert_eq!(draft.category.as_deref(), Some("Electronics"));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut dialog = DialogState::default();
        dialog.open_create();
        if let Some(draft) = dialog.draft_mut() {
            draft.title = "half-typed".to_string();
        }

        dialog.cancel();
        assert_eq!(dialog, DialogState::Closed);
        assert_eq!(dialog.save(), None);
    }

    #[test]
    fn test_save_create_yields_create_commit() {
        let mut dialog = DialogState::default();
        dialog.open_create();
        if let Some(draft) = dialog.draft_mut() {
            draft.title = "B".to_string();
            draft.price = Decimal::from(5);
        }

        let commit = dialog.save().expect("open dialog commits");
        match commit {
            Commit::Create(draft) => {
                assert_eq!(draft.title, "B");
                assert_eq!(draft.price, Decimal::from(5));
            }
            Commit::Update { .. } => panic!("expected create commit"),
        }
        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn test_save_edit_yields_update_commit() {
        let mut dialog = DialogState::default();
        dialog.open_edit(product());
        if let Some(draft) = dialog.draft_mut() {
            draft.price = Decimal::from(25);
        }

        let commit = dialog.save().expect("open dialog commits");
        match commit {
            Commit::Update { id, draft } => {
                assert_eq!(id, ProductId::Remote(4));
                assert_eq!(draft.price, Decimal::from(25));
            }
            Commit::Create(_) => panic!("expected update commit"),
        }
    }

    #[test]
    fn test_save_while_closed_is_none() {
        let mut dialog = DialogState::default();
        assert_eq!(dialog.save(), None);
    }
}
