//! # Order Export
//!
//! Renders the order collection as comma-delimited text for download.
//!
//! ## Row Layout
//! ```text
//! Order ID,Status,Customer Name,Email,Total,Items,Created Date,Tracking Number
//! ORD-1718…,pending,Ada Lovelace,ada@example.com,70.00,Ownership Tee x2,6/10/2026,N/A
//! ```
//!
//! [`CsvQuoting::None`] reproduces the storefront's historical output: fields
//! are joined with commas as-is, so a value containing a comma shifts every
//! following column. [`CsvQuoting::Rfc4180`] quotes such fields instead and
//! is opt-in.

use chrono::{Local, TimeZone};

use crate::types::Order;

/// Column headers, in row order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "Order ID",
    "Status",
    "Customer Name",
    "Email",
    "Total",
    "Items",
    "Created Date",
    "Tracking Number",
];

/// Cell shown when an order has no tracking number.
pub const MISSING_TRACKING: &str = "N/A";

/// Separator between items inside the Items cell.
pub const ITEM_SEPARATOR: &str = "; ";

const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Field escaping applied to each cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvQuoting {
    /// Join raw values with commas.
    #[default]
    None,
    /// Quote cells containing a comma, quote or line break; double inner quotes.
    Rfc4180,
}

impl CsvQuoting {
    fn cell(self, value: &str) -> String {
        match self {
            CsvQuoting::None => value.to_string(),
            CsvQuoting::Rfc4180 => {
                if value.contains([',', '"', '\n', '\r']) {
                    format!("\"{}\"", value.replace('"', "\"\""))
                } else {
                    value.to_string()
                }
            }
        }
    }
}

/// Exports with dates in the machine's local time zone.
pub fn export_csv(orders: &[Order], quoting: CsvQuoting) -> String {
    export_csv_in(orders, &Local, quoting)
}

/// Exports with created dates rendered in `zone`.
///
/// Rows are separated by `\n`; there is no trailing newline.
pub fn export_csv_in<Tz: TimeZone>(orders: &[Order], zone: &Tz, quoting: CsvQuoting) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines = Vec::with_capacity(orders.len() + 1);
    lines.push(EXPORT_HEADERS.join(","));
    lines.extend(orders.iter().map(|order| {
        export_row(order, zone)
            .iter()
            .map(|value| quoting.cell(value))
            .collect::<Vec<_>>()
            .join(",")
    }));
    lines.join("\n")
}

/// The eight unescaped cells of one order.
pub fn export_row<Tz: TimeZone>(order: &Order, zone: &Tz) -> [String; 8]
where
    Tz::Offset: std::fmt::Display,
{
    let items = order
        .items
        .iter()
        .map(|item| item.summary())
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);

    [
        order.reference.clone(),
        order.status.to_string(),
        order.customer.full_name(),
        order.customer.email.clone(),
        order.total().to_decimal_string(),
        items,
        order
            .created_at
            .with_timezone(zone)
            .format(DATE_FORMAT)
            .to_string(),
        order
            .tracking_number
            .clone()
            .unwrap_or_else(|| MISSING_TRACKING.to_string()),
    ]
}

/// Suggested download name: `storefront-orders-YYYY-MM-DD.csv`.
pub fn export_file_name<Tz: TimeZone>(today: &chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("storefront-orders-{}.csv", today.format("%Y-%m-%d"))
}
