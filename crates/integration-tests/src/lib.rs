//! Test support for Shopfront integration tests.
//!
//! Provides [`MockCatalog`], an in-process HTTP server with the demo
//! catalog's wire behavior: `GET {base}` lists the seeded products,
//! while `POST {base}/add`, `PUT {base}/{id}` and `DELETE {base}/{id}`
//! echo the write back without persisting anything. Unknown ids on
//! update/delete answer 404, like the real API.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;

use shopfront_core::{Product, ProductDraft, ProductId};

struct MockCatalogState {
    products: Vec<Product>,
    next_id: AtomicI64,
}

/// An in-process catalog server bound to an ephemeral loopback port.
///
/// The server task is aborted on drop.
pub struct MockCatalog {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl MockCatalog {
    /// Start a mock catalog seeded with `products`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound (test environment only).
    pub async fn start(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .filter_map(|p| match p.id {
                ProductId::Remote(n) => Some(n),
                ProductId::Local(_) => None,
            })
            .max()
            .unwrap_or(100)
            + 1;

        let state = Arc::new(MockCatalogState {
            products,
            next_id: AtomicI64::new(next_id),
        });

        let app = Router::new()
            .route("/products", get(list))
            .route("/products/add", post(create))
            .route("/products/{id}", put(update).delete(remove))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog listener");
        let addr = listener.local_addr().expect("mock catalog local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock catalog");
        });

        Self {
            base_url: format!("http://{addr}/products"),
            handle,
        }
    }

    /// Base URL to point a `CatalogClient` at.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn parse_id(raw: String) -> ProductId {
    raw.parse().unwrap_or_else(|never| match never {})
}

async fn list(State(state): State<Arc<MockCatalogState>>) -> Json<serde_json::Value> {
    Json(json!({
        "products": state.products,
        "total": state.products.len(),
    }))
}

// Echo with a fresh id; nothing is stored (dummyjson semantics).
async fn create(
    State(state): State<Arc<MockCatalogState>>,
    Json(draft): Json<ProductDraft>,
) -> Json<Product> {
    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    Json(draft.into_product(ProductId::Remote(id)))
}

async fn update(
    State(state): State<Arc<MockCatalogState>>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, StatusCode> {
    let id = parse_id(id);
    if state.products.iter().any(|p| p.id == id) {
        Ok(Json(draft.into_product(id)))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn remove(
    State(state): State<Arc<MockCatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    let id = parse_id(id);
    state
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
