//! Shopfront Store - Client-side storefront state engine.
//!
//! # Architecture
//!
//! - Remote catalog reached over plain REST JSON via `reqwest`
//! - The catalog is a demo API: writes are echoed, never persisted, so
//!   locally-created products live in a durable JSON overlay file
//! - State containers constructed once at startup and injected into
//!   consumers via [`Storefront`]
//! - Single cooperative runtime; store operations suspend only at the
//!   network await, locks are held only to apply a state transition
//!
//! # Modules
//!
//! - [`catalog`] - REST client for the remote catalog API
//! - [`products`] - Remote-fetched product list with loading/error state
//! - [`overlay`] - Locally-created products, durable, merged on read
//! - [`cart`] - In-memory session cart
//! - [`dialog`] - Create/edit dialog state machine
//! - [`config`] - Environment-driven configuration
//! - [`state`] - The [`Storefront`] facade tying the stores together
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_store::{Storefront, StorefrontConfig};
//!
//! let storefront = Storefront::new(StorefrontConfig::from_env()?);
//! storefront.refresh().await?;
//! for product in storefront.merged_products() {
//!     println!("{} - {}", product.id, product.title);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod overlay;
pub mod products;
pub mod state;

pub use cart::CartStore;
pub use catalog::{CatalogClient, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use dialog::{Commit, DialogState};
pub use error::{Result, StoreError};
pub use overlay::{OverlayError, OverlayStore, merge};
pub use products::{ProductsState, ProductsStore};
pub use state::Storefront;
