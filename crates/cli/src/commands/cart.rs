//! Cart commands.
//!
//! Each invocation hydrates the persisted cart, applies at most one
//! operation, and prints the resulting state, so the binary doubles as a
//! manual round-trip check of the persistence path.

use rust_decimal::Decimal;

use gomarket_cart::{CartItem, CartStore, Product};
use gomarket_core::{Price, ProductId};

/// Add a product to the cart.
pub async fn add(store: &CartStore, id: String, title: String, image_url: String, price: Decimal) {
    store
        .add_to_cart(Product {
            id: ProductId::new(id),
            title,
            image_url,
            price: Price::new(price),
        })
        .await;
}

/// Increase the quantity of the item with `id` by one.
pub async fn increment(store: &CartStore, id: &str) {
    store.increment(&ProductId::new(id)).await;
}

/// Decrease the quantity of the item with `id` by one.
pub async fn decrement(store: &CartStore, id: &str) {
    store.decrement(&ProductId::new(id)).await;
}

/// Print the cart with line totals and a subtotal.
#[allow(clippy::print_stdout)]
pub fn print_cart(items: &[CartItem]) {
    if items.is_empty() {
        println!("Cart is empty");
        return;
    }

    let mut subtotal = Decimal::ZERO;
    println!(
        "{:<14} {:<30} {:>4} {:>10} {:>10}",
        "ID", "TITLE", "QTY", "PRICE", "TOTAL"
    );
    for item in items {
        let line_total = item.price.total(item.quantity);
        subtotal += line_total;
        println!(
            "{:<14} {:<30} {:>4} {:>10} {:>10}",
            item.id,
            item.title,
            item.quantity,
            item.price.to_string(),
            format!("${line_total:.2}"),
        );
    }
    println!("{:>72}", format!("subtotal: ${subtotal:.2}"));
}
