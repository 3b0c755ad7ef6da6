//! Local-overlay inspection commands.

use shopfront_store::Result;

/// Print the overlay contents.
pub fn show() -> Result<()> {
    let storefront = super::storefront()?;
    let products = storefront.overlay().products();

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Overlay at {} ({} product(s)):",
            storefront.overlay().path().display(),
            products.len()
        );
    }
    for product in &products {
        super::print_product(product);
    }

    Ok(())
}

/// Remove every locally-created product.
pub fn clear() -> Result<()> {
    let storefront = super::storefront()?;
    let count = storefront.overlay().products().len();
    storefront.overlay().clear()?;

    tracing::info!("overlay cleared, {count} product(s) removed");
    Ok(())
}
