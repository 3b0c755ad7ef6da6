//! Product and draft types.
//!
//! These mirror the catalog API's JSON shape. Fields the API returns
//! beyond this set (descriptions, ratings, stock) are ignored on
//! deserialize.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Remote or locally-synthesized identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the catalog's currency.
    pub price: Decimal,
    /// Image URL or opaque in-memory reference.
    #[serde(default, alias = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category label (free-form on the wire).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Id-less product fields, as edited in the create/edit dialog and
/// sent to the catalog's create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductDraft {
    /// Materialize the draft as a product under the given id.
    ///
    /// Used both for local creation (fresh id) and for edits, where the
    /// draft carries every field and replaces the entry wholesale while
    /// the id stays fixed.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            image: self.image,
            category: self.category,
        }
    }
}

impl From<Product> for ProductDraft {
    /// Seed a draft from an existing product (the edit flow).
    fn from(product: Product) -> Self {
        Self {
            title: product.title,
            price: product.price,
            image: product.image,
            category: product.category,
        }
    }
}

/// A cart line: a full product snapshot taken at add-time.
///
/// There is no quantity field; adding the same product twice yields two
/// entries.
pub type CartItem = Product;
