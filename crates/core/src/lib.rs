//! Shopfront Core - Shared types library.
//!
//! This crate provides the domain types used across all Shopfront
//! components:
//! - `store` - Client-side storefront state engine
//! - `cli` - Command-line driver for the store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, products, drafts, and cart items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
