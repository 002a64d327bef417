//! # Storefront Admin Entry Point
//!
//! ```bash
//! storefront-admin list --status pending
//! storefront-admin add-tracking ORD-1718000000000 1Z999AA10123456784
//! storefront-admin export --quoted
//! RUST_LOG=warn storefront-admin --json stats
//! ```

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_admin::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    storefront_admin::run(&args).await?;

    Ok(())
}
