//! # Command Line
//!
//! `clap` derive definitions for the admin binary.
//!
//! ## Usage
//! ```text
//! storefront-admin [--config PATH] [--data-dir PATH] [--json] <COMMAND>
//!
//!   list [--status S] [--search Q]    Orders, newest first
//!   show <REF>                        One order in full
//!   stats                             Dashboard statistics
//!   set-status <REF> <STATUS>         Change an order's status
//!   add-tracking <REF> <NUMBER>       Record tracking and mark shipped
//!   note <REF> <TEXT>                 Set internal notes ("" clears)
//!   delete <REF>                      Remove an order
//!   export [--quoted] [--out PATH]    Write the CSV export
//!   checkout <REQUEST.json>           Place an order from a JSON request
//! ```
//!
//! Global options are accepted before or after the subcommand. Values that
//! start with `-` go after `--`: `note ORD-1 -- "--fragile--"`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_core::validation::{validate_order_reference, validate_search_query};
use storefront_core::OrderStatus;

const BIN_NAME: &str = "storefront-admin";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = BIN_NAME)]
#[command(about = "Storefront order administration and checkout")]
#[command(
    after_help = "Statuses: pending, processing, shipped, delivered, cancelled\n\nEnvironment:\n  STOREFRONT_DATA_DIR   Order data directory\n  RUST_LOG              Log filter (default: info,storefront=debug)"
)]
pub struct Cli {
    /// Config file (default: platform config dir/storefront.toml)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,

    /// Override the order data directory
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Orders, newest first
    List {
        #[arg(long, value_parser = parse_status)]
        status: Option<OrderStatus>,
        #[arg(long, value_parser = parse_search)]
        search: Option<String>,
    },
    /// One order in full
    Show {
        #[arg(value_parser = parse_reference)]
        reference: String,
    },
    /// Dashboard statistics
    Stats,
    /// Change an order's status
    SetStatus {
        #[arg(value_parser = parse_reference)]
        reference: String,
        #[arg(value_parser = parse_status)]
        status: OrderStatus,
    },
    /// Record a tracking number and mark the order shipped
    AddTracking {
        #[arg(value_parser = parse_reference)]
        reference: String,
        #[arg(value_parser = parse_tracking)]
        tracking_number: String,
    },
    /// Set internal notes; blank text clears them
    Note {
        #[arg(value_parser = parse_reference)]
        reference: String,
        notes: String,
    },
    /// Remove an order
    Delete {
        #[arg(value_parser = parse_reference)]
        reference: String,
    },
    /// Write the CSV export
    Export {
        /// Quote fields per RFC 4180
        #[arg(long)]
        quoted: bool,
        /// Output file (default: ./storefront-orders-YYYY-MM-DD.csv)
        #[arg(long, short = 'o', value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Place an order from a JSON request file
    Checkout {
        #[arg(value_name = "REQUEST.json")]
        request: PathBuf,
    },
}

/// Parses arguments (without the program name).
///
/// Help and version requests come back as the `clap` error carrying the
/// rendered text; see [`clap::Error::kind`].
pub fn parse<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into));
    Cli::try_parse_from(argv)
}

fn parse_status(value: &str) -> Result<OrderStatus, String> {
    value.parse::<OrderStatus>().map_err(|e| e.to_string())
}

fn parse_search(value: &str) -> Result<String, String> {
    validate_search_query(value).map_err(|e| e.to_string())
}

fn parse_reference(value: &str) -> Result<String, String> {
    validate_order_reference(value).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

fn parse_tracking(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("tracking number is required".to_string());
    }
    Ok(trimmed.to_string())
}
