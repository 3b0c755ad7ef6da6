//! Domain types shared across Shopfront crates.

mod id;
mod product;

pub use id::ProductId;
pub use product::{CartItem, Product, ProductDraft};
