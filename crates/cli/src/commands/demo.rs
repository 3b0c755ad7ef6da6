//! Scripted storefront session.
//!
//! Walks one full session in a single process: fetch the remote
//! catalog, create a product in the local overlay, put things in the
//! cart, and show that cart state is session-scoped while the overlay
//! is durable. Useful as a smoke test against the real demo API.

use rust_decimal::Decimal;

use shopfront_core::ProductDraft;
use shopfront_store::Result;
use shopfront_store::dialog::Commit;

#[allow(clippy::print_stdout)]
pub async fn run() -> Result<()> {
    let storefront = super::storefront()?;

    println!("-- fetching catalog from {}", storefront.config().catalog_base_url);
    if let Err(err) = storefront.refresh().await {
        println!("   fetch failed ({err}); continuing with local products only");
    }
    let state = storefront.products_state();
    println!("   {} remote product(s), error: {:?}", state.products.len(), state.error);

    println!("-- creating a local product");
    let created = storefront
        .commit(Commit::Create(ProductDraft {
            title: "Demo Product".to_string(),
            price: Decimal::new(500, 2),
            image: None,
            category: Some("Electronics".to_string()),
        }))
        .await?;
    println!("   created {} (durable in {})", created.id, storefront.overlay().path().display());

    println!("-- merged product list");
    let merged = storefront.merged_products();
    for product in &merged {
        super::print_product(product);
    }

    println!("-- cart round trip");
    storefront.add_to_cart(&created.id)?;
    if let Some(first) = merged.first() {
        storefront.add_to_cart(&first.id)?;
    }
    println!("   cart has {} line(s)", storefront.cart_items().len());

    storefront.remove_from_cart(&created.id);
    println!("   after remove: {} line(s)", storefront.cart_items().len());

    storefront.clear_cart();
    println!("   after clear: {} line(s)", storefront.cart_items().len());

    println!("-- cleaning up the demo product");
    storefront.delete_product(&created.id).await?;
    println!("   overlay now holds {} product(s)", storefront.overlay().products().len());

    Ok(())
}
