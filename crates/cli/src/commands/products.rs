//! Product browsing and management commands.

use rust_decimal::Decimal;

use shopfront_core::{ProductDraft, ProductId};
use shopfront_store::dialog::{Commit, DialogState};
use shopfront_store::{Result, StoreError};

/// Fetch the catalog and print the merged product list.
///
/// A failed fetch is not fatal: the error lands in the products state
/// and whatever the overlay holds is still shown.
pub async fn list() -> Result<()> {
    let storefront = super::storefront()?;

    if let Err(err) = storefront.refresh().await {
        tracing::warn!("catalog fetch failed, showing local products only: {err}");
    }

    let products = storefront.merged_products();

    #[allow(clippy::print_stdout)]
    {
        if products.is_empty() {
            println!("No products.");
        }
    }
    for product in &products {
        super::print_product(product);
    }

    Ok(())
}

/// Create a product, locally by default or remotely with `--remote`.
pub async fn create(
    title: String,
    price: Decimal,
    category: Option<String>,
    image: Option<String>,
    remote: bool,
) -> Result<()> {
    let storefront = super::storefront()?;
    let draft = ProductDraft {
        title,
        price,
        image,
        category,
    };

    let created = if remote {
        let created = storefront.create_remote(draft).await?;
        tracing::info!(id = %created.id, "created via remote catalog (echo only, not durable)");
        created
    } else {
        storefront.commit(Commit::Create(draft)).await?
    };

    super::print_product(&created);
    Ok(())
}

/// Update a product through the edit dialog; omitted fields keep their
/// current value.
pub async fn update(
    id: &ProductId,
    title: Option<String>,
    price: Option<Decimal>,
    category: Option<String>,
    image: Option<String>,
) -> Result<()> {
    let storefront = super::storefront()?;

    // The current product seeds the dialog draft, so we need the
    // freshest merged list first.
    if let Err(err) = storefront.refresh().await {
        tracing::warn!("catalog fetch failed, editing against local state: {err}");
    }

    let current = storefront
        .merged_products()
        .into_iter()
        .find(|p| p.id == *id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;

    let mut dialog = DialogState::default();
    dialog.open_edit(current);
    if let Some(draft) = dialog.draft_mut() {
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(price) = price {
            draft.price = price;
        }
        if let Some(category) = category {
            draft.category = Some(category);
        }
        if let Some(image) = image {
            draft.image = Some(image);
        }
    }

    if let Some(commit) = dialog.save() {
        let updated = storefront.commit(commit).await?;
        super::print_product(&updated);
    }

    Ok(())
}

/// Delete a product from the remote store and the overlay.
pub async fn delete(id: &ProductId) -> Result<()> {
    let storefront = super::storefront()?;
    storefront.delete_product(id).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Deleted {id}");
    }
    Ok(())
}
