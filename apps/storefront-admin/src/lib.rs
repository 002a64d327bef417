//! # Storefront Admin
//!
//! Admin dashboard and checkout entry point for the storefront.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse the command line
//! 3. Load configuration (file → environment → validation)
//! 4. Open the file-backed order store
//! 5. Run the command and print its result
//!
//! ## Module Organization
//! ```text
//! storefront_admin/
//! ├── cli.rs       ◄─── Argument parsing
//! ├── config.rs    ◄─── AdminConfig (storefront.toml + STOREFRONT_*)
//! ├── error.rs     ◄─── ApiError / ErrorCode
//! ├── checkout.rs  ◄─── CheckoutFlow, PaymentGateway, OrderNotifier
//! ├── commands/    ◄─── One function per admin action
//! └── output.rs    ◄─── Table / detail / JSON rendering
//! ```

pub mod checkout;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::CommandFactory;
use storefront_core::export::CsvQuoting;
use storefront_store::{OrderStore, SlotStorage};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::{checkout as checkout_cmd, export, orders, stats};
use crate::config::AdminConfig;
use crate::error::ApiError;
use crate::output::Output;

/// Runs one admin invocation. `args` excludes the program name.
pub async fn run(args: &[String]) -> Result<(), ApiError> {
    let cli = match cli::parse(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", err);
                return Ok(());
            }
            _ => return Err(ApiError::validation(err.to_string())),
        },
    };

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = AdminConfig::load(cli.config_path.clone())?;
    if let Some(dir) = &cli.data_dir {
        config.store.data_dir = Some(dir.clone());
    }

    info!(
        data_dir = %config.data_dir().display(),
        slot = %config.store.slot,
        "Storefront admin starting"
    );

    let store = config.store_config().open();

    match execute(command, &store, &config).await {
        Ok(output) => {
            if cli.json {
                println!("{}", output::render_json(&output)?);
            } else {
                println!("{}", output::render(&output, &config.store.currency_symbol));
            }
            Ok(())
        }
        Err(e) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            }
            Err(e)
        }
    }
}

/// Dispatches a parsed command against `store`.
pub async fn execute<S: SlotStorage>(
    command: &Command,
    store: &OrderStore<S>,
    config: &AdminConfig,
) -> Result<Output, ApiError> {
    let output = match command {
        Command::List { status, search } => {
            Output::Orders(orders::list_orders(store, *status, search.clone()))
        }
        Command::Show { reference } => Output::Order(Box::new(orders::get_order(store, reference)?)),
        Command::Stats => Output::Stats(stats::get_stats(store)),
        Command::SetStatus { reference, status } => {
            Output::Order(Box::new(orders::set_order_status(store, reference, *status)?))
        }
        Command::AddTracking {
            reference,
            tracking_number,
        } => Output::Order(Box::new(orders::add_tracking(
            store,
            reference,
            tracking_number,
        )?)),
        Command::Note { reference, notes } => {
            Output::Order(Box::new(orders::set_notes(store, reference, notes)?))
        }
        Command::Delete { reference } => {
            orders::delete_order(store, reference)?;
            Output::Deleted {
                deleted: reference.clone(),
            }
        }
        Command::Export { quoted, out } => {
            let quoting = if *quoted {
                CsvQuoting::Rfc4180
            } else {
                CsvQuoting::None
            };
            Output::Exported(export::export_orders(
                store,
                quoting,
                out.clone(),
                &PathBuf::from("."),
            )?)
        }
        Command::Checkout { request } => Output::Placed(Box::new(
            checkout_cmd::checkout_from_file(store, config, request).await?,
        )),
    };

    Ok(output)
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug messages
/// - `RUST_LOG=storefront=trace` - Trace level for storefront crates only
/// - Default: `info` level, `debug` for storefront crates
///
/// Logs go to stderr so command output on stdout stays pipeable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}
