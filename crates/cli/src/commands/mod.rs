//! CLI command implementations.

pub mod demo;
pub mod overlay;
pub mod products;

use shopfront_store::{Result, Storefront, StorefrontConfig};

/// Build the storefront from environment configuration.
pub fn storefront() -> Result<Storefront> {
    Ok(Storefront::new(StorefrontConfig::from_env()?))
}

/// Print one product row.
#[allow(clippy::print_stdout)]
pub fn print_product(product: &shopfront_core::Product) {
    println!(
        "{:>16}  {:<36} ${:<10} {}",
        product.id.to_string(),
        product.title,
        product.price,
        product.category.as_deref().unwrap_or("N/A"),
    );
}
