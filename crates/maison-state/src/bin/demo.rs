//! # Demo Session Walkthrough
//!
//! Runs a full shopping session against a real on-disk store.
//!
//! ## Usage
//! ```bash
//! # Default data directory (./maison_data)
//! cargo run -p maison-state --bin demo
//!
//! # Custom data directory
//! cargo run -p maison-state --bin demo -- --data ./tmp/shop
//!
//! # Verbose state mutation logging
//! RUST_LOG=debug cargo run -p maison-state --bin demo
//! ```
//!
//! Run it twice: the second run rehydrates the wishlist, user, and order
//! history the first run persisted.

use std::env;

use tracing_subscriber::EnvFilter;

use maison_core::{Catalog, PaymentMethod, ShippingInfo, StaticCatalog};
use maison_state::{MockAuthenticator, StoreState};
use maison_storage::{JsonFileStore, Storage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut data_dir = "./maison_data".to_string();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--data" => {
                if let Some(dir) = args.next() {
                    data_dir = dir;
                }
            }
            "-h" | "--help" => {
                println!("Maison Demo Session");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <DIR>   Data directory (default: ./maison_data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
    }

    println!("🛍  Maison Demo Session");
    println!("======================");
    println!("Data directory: {}", data_dir);
    println!();

    let backend = JsonFileStore::open(&data_dir)?;
    let storage = Storage::new(Box::new(backend));
    let catalog = StaticCatalog::demo();
    let mut store = StoreState::open(storage, Box::new(MockAuthenticator));

    println!("✓ Store opened");
    println!(
        "  Rehydrated: {} cart lines, {} wishlist items, {} orders, signed in: {}",
        store.cart().line_count(),
        store.wishlist().len(),
        store.orders().len(),
        store.user().map(|u| u.name.as_str()).unwrap_or("no")
    );
    println!();

    println!("Browsing the catalog...");
    for product in catalog.products().iter().take(3) {
        println!(
            "  #{} {} - {}",
            product.id,
            product.name,
            product.effective_price()
        );
    }
    println!();

    println!("Adding to cart...");
    store.add_to_cart(1, 2, Some("M".into()), Some("White".into()), None)?;
    store.add_to_cart(1, 1, Some("M".into()), Some("White".into()), None)?;
    store.add_to_cart(3, 1, None, None, None)?;
    println!(
        "  {} lines, {} units (same variant merged)",
        store.cart().line_count(),
        store.cart().total_quantity()
    );

    store.add_to_wishlist(2)?;
    store.add_to_wishlist(2)?;
    println!("  Wishlist: {} item(s) (duplicate add ignored)", store.wishlist().len());
    println!();

    println!("Signing in...");
    if store.login("jamie@example.com", "secret")? {
        let user = store.user().ok_or("signed in but no user")?;
        println!("  ✓ Welcome back, {} (admin: {})", user.name, user.is_admin);
    }
    println!();

    println!("Checking out...");
    let shipping = ShippingInfo {
        name: "Jamie Doe".to_string(),
        phone: "555-0199".to_string(),
        address: "12 Rue de Rivoli, Paris".to_string(),
    };
    let order = store.checkout(&catalog, shipping, PaymentMethod::CashOnDelivery)?;
    println!("  ✓ Order {} placed", order.id);
    println!("    Items:    {}", order.items_total());
    println!("    Total:    {} (shipping included)", order.total());
    println!("    Cart now: {} lines", store.cart().line_count());
    println!();

    println!("Order history (most recent first):");
    for order in store.orders() {
        println!(
            "  {}  {:?}  {}",
            order.placed_at.format("%Y-%m-%d %H:%M"),
            order.status,
            order.total()
        );
    }
    println!();

    store.flush()?;
    println!("✓ Flushed. Run again to see this session rehydrate.");

    Ok(())
}
