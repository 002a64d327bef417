//! # Seed Data Generator
//!
//! Populates a file-backed order store with demo orders for development.
//!
//! ## Usage
//! ```bash
//! # Generate 40 orders (default) in ./data
//! cargo run -p storefront-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p storefront-store --bin seed -- --count 200
//!
//! # Specify data directory and slot
//! cargo run -p storefront-store --bin seed -- --dir ./tmp --slot demo_orders
//! ```
//!
//! ## Generated Orders
//! - References `ORD-<millis>`, spaced a few hours apart going backwards
//! - Statuses cycle through every status
//! - Dates spread over roughly the last three months
//! - Shipped and delivered orders carry a tracking number

use std::env;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use storefront_core::{
    generate_order_reference, Customer, LineItem, NewOrder, OrderPatch, OrderStatus,
};
use storefront_store::{OrderStore, SlotStorage, StoreConfig, DEFAULT_SLOT};

/// Catalog used for line items: (id, name, price in cents, colors).
const PRODUCTS: &[(&str, &str, i64, &[&str])] = &[
    ("tee", "Ownership Tee", 3500, &["black", "white", "sand"]),
    ("hoodie", "Borrow Checker Hoodie", 5999, &["grey", "black"]),
    ("cap", "Lifetime Cap", 2500, &["black", "navy"]),
    ("mug", "Zero-Cost Mug", 1250, &["white"]),
    ("tote", "Crate Tote", 1800, &["natural", "black"]),
];

const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("Ada", "Lovelace", "London", "GB"),
    ("Grace", "Hopper", "Arlington", "US"),
    ("Alan", "Turing", "Manchester", "GB"),
    ("Barbara", "Liskov", "Boston", "US"),
    ("Edsger", "Dijkstra", "Nuenen", "NL"),
    ("Margaret", "Hamilton", "Paoli", "US"),
    ("Donald", "Knuth", "Stanford", "US"),
    ("Frances", "Allen", "Peru", "US"),
];

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut dir = String::from("./data");
    let mut slot = String::from(DEFAULT_SLOT);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1]
                        .parse()
                        .with_context(|| format!("invalid --count value '{}'", args[i + 1]))?;
                    i += 1;
                }
            }
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--slot" | "-s" => {
                if i + 1 < args.len() {
                    slot = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Storefront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of orders to generate (default: 40)");
                println!("  -d, --dir <PATH>    Data directory (default: ./data)");
                println!("  -s, --slot <NAME>   Slot name (default: {})", DEFAULT_SLOT);
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => anyhow::bail!("unknown argument '{}', see --help", other),
        }
        i += 1;
    }

    println!("Storefront Seed Data Generator");
    println!("==============================");
    println!("Directory: {}", dir);
    println!("Slot:      {}", slot);
    println!("Orders:    {}", count);
    println!();

    let store = StoreConfig::new(&dir).slot(&slot).open();

    let existing = store.count();
    if existing > 0 {
        println!("Store already has {} orders", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the slot file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let now = Utc::now();

    let mut placed = Vec::with_capacity(count);
    for n in 0..count {
        let placed_at = now - Duration::hours(n as i64 * 53);
        let id = seed_order(&store, n, placed_at)
            .with_context(|| format!("failed to write order #{}", n))?;
        placed.push((id, placed_at));
        if (n + 1) % 20 == 0 {
            println!("  Generated {} orders...", n + 1);
        }
    }

    backdate(&store, &placed).context("failed to backdate orders")?;

    println!();
    println!("Generated {} orders in {:?}", count, start.elapsed());

    let stats = store.stats();
    println!();
    println!("Total orders:    {}", stats.total);
    println!("This month:      {}", stats.this_month);
    println!("Total revenue:   {}", stats.total_revenue);
    println!("Monthly revenue: {}", stats.monthly_revenue);
    for (status, orders) in stats.by_status.iter() {
        println!("  {:<11} {}", status.as_str(), orders);
    }

    println!();
    println!("Seed complete!");
    Ok(())
}

/// Creates one demo order and applies its status. Returns the order id.
fn seed_order<S: SlotStorage>(
    store: &OrderStore<S>,
    n: usize,
    placed_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let created = store.create(generate_order(n, placed_at))?;

    let status = OrderStatus::ALL[n % OrderStatus::ALL.len()];
    let mut patch = OrderPatch::status(status);
    if matches!(status, OrderStatus::Shipped | OrderStatus::Delivered) {
        patch = patch.with_tracking_number(format!("1Z{:010}", n * 7919));
    }
    store.update(&created.reference, patch)?;

    Ok(created.id)
}

/// Rewrites timestamps so the dashboard shows a spread of months.
///
/// The store always stamps `now`, so this goes straight to the slot.
fn backdate<S: SlotStorage>(
    store: &OrderStore<S>,
    placed: &[(String, DateTime<Utc>)],
) -> anyhow::Result<()> {
    let mut orders = store.list_all();
    for order in &mut orders {
        if let Some((_, placed_at)) = placed.iter().find(|(id, _)| *id == order.id) {
            order.created_at = *placed_at;
            order.updated_at = *placed_at;
        }
    }

    let blob = serde_json::to_string(&orders)?;
    store.storage().write(store.slot(), &blob)?;
    Ok(())
}

/// Builds a realistic order payload for index `n`.
fn generate_order(n: usize, placed_at: DateTime<Utc>) -> NewOrder {
    let (first, last, city, country) = CUSTOMERS[n % CUSTOMERS.len()];

    let line_count = 1 + n % 3;
    let items: Vec<LineItem> = (0..line_count)
        .map(|k| {
            let (id, name, price_cents, colors) = PRODUCTS[(n + k * 2) % PRODUCTS.len()];
            let color = colors[(n + k) % colors.len()];
            LineItem {
                id: format!("{}-{}", id, color),
                name: name.to_string(),
                price_cents,
                quantity: 1 + ((n + k) % 3) as i64,
                color: color.to_string(),
            }
        })
        .collect();

    let total_cents = items
        .iter()
        .map(|item| item.price_cents * item.quantity)
        .sum();

    NewOrder {
        reference: generate_order_reference(placed_at),
        status: OrderStatus::Pending,
        customer: Customer {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            address: format!("{} Main Street", 10 + n),
            city: city.to_string(),
            postal_code: format!("{:05}", 10000 + n * 37),
            country: country.to_string(),
        },
        items,
        total_cents,
        payment_intent_id: Some(format!("pi_seed_{:04}", n)),
        tracking_number: None,
        notes: None,
    }
}
