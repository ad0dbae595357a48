//! GoMarket CLI - cart client over file-backed storage.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart (increments if already present)
//! gomarket add --id prod-1 --title "Espresso Maker" \
//!     --image-url https://cdn.example.com/prod-1.png --price 129.90
//!
//! # Change quantities
//! gomarket increment prod-1
//! gomarket decrement prod-1
//!
//! # Print the current cart
//! gomarket show
//! ```
//!
//! # Environment Variables
//!
//! - `GOMARKET_DATA_DIR` - Directory for the persisted cart (default: `./data`)
//! - `GOMARKET_NAMESPACE` - Storage-key namespace (default: `gomarket`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use gomarket_cart::{CartConfig, CartStore, FileStorage};

mod commands;

#[derive(Parser)]
#[command(name = "gomarket")]
#[command(author, version, about = "GoMarket cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart (increments it if already present)
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        title: String,

        /// Display image URL
        #[arg(long)]
        image_url: String,

        /// Unit price (e.g. 129.90)
        #[arg(long)]
        price: Decimal,
    },
    /// Increase the quantity of a cart item by one
    Increment {
        /// Product id
        id: String,
    },
    /// Decrease the quantity of a cart item by one (removes it at zero)
    Decrement {
        /// Product id
        id: String,
    },
    /// Print the current cart
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gomarket=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let storage = Arc::new(FileStorage::new(&config.data_dir));
    let store = CartStore::new(storage, config.storage_key());
    store.hydrate().await;

    match cli.command {
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => commands::cart::add(&store, id, title, image_url, price).await,
        Commands::Increment { id } => commands::cart::increment(&store, &id).await,
        Commands::Decrement { id } => commands::cart::decrement(&store, &id).await,
        Commands::Show => {}
    }

    commands::cart::print_cart(&store.products().await);
    Ok(())
}
