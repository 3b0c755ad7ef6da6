//! Shopfront CLI - command-line driver for the storefront store.
//!
//! # Usage
//!
//! ```bash
//! # List the merged product catalog (remote + local overlay)
//! shopfront products list
//!
//! # Create a product in the local overlay (survives restarts)
//! shopfront products create --title "Desk Lamp" --price 24.99 --category Electronics
//!
//! # Create through the remote catalog instead (echo-only demo API)
//! shopfront products create --title "Desk Lamp" --price 24.99 --remote
//!
//! # Edit and delete
//! shopfront products update local-1712345678 --price 19.99
//! shopfront products delete 4
//!
//! # Inspect or reset the overlay
//! shopfront overlay show
//! shopfront overlay clear
//!
//! # Scripted walkthrough of a full session (fetch, create, cart)
//! shopfront demo
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_BASE_URL` - remote catalog endpoint (default dummyjson)
//! - `SHOPFRONT_OVERLAY_PATH` - overlay file location

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use shopfront_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Inspect the local-products overlay
    Overlay {
        #[command(subcommand)]
        action: OverlayAction,
    },
    /// Run a scripted storefront session
    Demo,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Fetch the catalog and print the merged product list
    List,
    /// Create a product
    Create {
        /// Product title
        #[arg(short, long)]
        title: String,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Image URL
        #[arg(short, long)]
        image: Option<String>,

        /// Send the create to the remote catalog instead of the
        /// local overlay (the demo API echoes it without persisting)
        #[arg(long)]
        remote: bool,
    },
    /// Update a product; omitted fields keep their current value
    Update {
        /// Product id (numeric for remote, `local-…` for local)
        id: ProductId,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        price: Option<Decimal>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        image: Option<String>,
    },
    /// Delete a product from the store and the overlay
    Delete {
        /// Product id
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum OverlayAction {
    /// Print the overlay contents
    Show,
    /// Remove every locally-created product
    Clear,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> shopfront_store::Result<()> {
    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list().await?,
            ProductsAction::Create {
                title,
                price,
                category,
                image,
                remote,
            } => {
                commands::products::create(title, price, category, image, remote).await?;
            }
            ProductsAction::Update {
                id,
                title,
                price,
                category,
                image,
            } => {
                commands::products::update(&id, title, price, category, image).await?;
            }
            ProductsAction::Delete { id } => commands::products::delete(&id).await?,
        },
        Commands::Overlay { action } => match action {
            OverlayAction::Show => commands::overlay::show()?,
            OverlayAction::Clear => commands::overlay::clear()?,
        },
        Commands::Demo => commands::demo::run().await?,
    }
    Ok(())
}
