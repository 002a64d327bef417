//! # Output Rendering
//!
//! Turns command results into terminal text or JSON.

use chrono::Local;
use serde::Serialize;
use storefront_core::{Order, OrderStats};

use crate::checkout::CheckoutOutcome;
use crate::commands::export::ExportSummary;
use crate::error::ApiError;

pub const NO_ORDERS: &str = "No orders found matching your criteria.";

/// A command result waiting to be printed.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Output {
    Orders(Vec<Order>),
    Order(Box<Order>),
    Stats(OrderStats),
    Deleted { deleted: String },
    Exported(ExportSummary),
    Placed(Box<CheckoutOutcome>),
}

/// Renders for people, amounts prefixed with `symbol`.
pub fn render(output: &Output, symbol: &str) -> String {
    match output {
        Output::Orders(orders) => order_table(orders, symbol),
        Output::Order(order) => order_detail(order, symbol),
        Output::Stats(stats) => stats_summary(stats, symbol),
        Output::Deleted { deleted } => format!("Deleted order {}", deleted),
        Output::Exported(summary) => format!(
            "Exported {} orders to {}",
            summary.rows,
            summary.path.display()
        ),
        Output::Placed(outcome) => checkout_summary(outcome, symbol),
    }
}

pub fn render_json(output: &Output) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(output)?)
}

fn order_table(orders: &[Order], symbol: &str) -> String {
    if orders.is_empty() {
        return NO_ORDERS.to_string();
    }

    let mut lines = vec![format!(
        "{:<18} {:<10} {:<11} {:>10}  {}",
        "ORDER", "DATE", "STATUS", "TOTAL", "CUSTOMER"
    )];
    lines.extend(orders.iter().map(|order| {
        format!(
            "{:<18} {:<10} {:<11} {:>10}  {} <{}>",
            order.reference,
            order.created_at.with_timezone(&Local).format("%Y-%m-%d"),
            order.status,
            order.total().format_with_symbol(symbol),
            order.customer.full_name(),
            order.customer.email,
        )
    }));
    lines.join("\n")
}

fn order_detail(order: &Order, symbol: &str) -> String {
    let mut lines = vec![
        format!("Order {}", order.reference),
        format!("  Status:    {}", order.status),
        format!(
            "  Placed:    {}",
            order.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        format!(
            "  Updated:   {}",
            order.updated_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        format!("  Customer:  {} <{}>", order.customer.full_name(), order.customer.email),
        format!("  Ship to:   {}", order.customer.shipping_address()),
        "  Items:".to_string(),
    ];

    for item in &order.items {
        lines.push(format!(
            "    {:<32} {:>10}",
            format!("{} ({})", item.summary(), item.color),
            item.line_total().format_with_symbol(symbol)
        ));
    }

    lines.push(format!("  Total:     {}", order.total().format_with_symbol(symbol)));

    if let Some(intent) = &order.payment_intent_id {
        lines.push(format!("  Payment:   {}", intent));
    }
    if let Some(tracking) = &order.tracking_number {
        lines.push(format!("  Tracking:  {}", tracking));
    }
    if let Some(notes) = &order.notes {
        lines.push(format!("  Notes:     {}", notes));
    }

    lines.join("\n")
}

fn stats_summary(stats: &OrderStats, symbol: &str) -> String {
    let mut lines = vec![
        format!("Total orders:    {}", stats.total),
        format!("This month:      {}", stats.this_month),
        format!(
            "Total revenue:   {}",
            stats.total_revenue.format_with_symbol(symbol)
        ),
        format!(
            "Monthly revenue: {}",
            stats.monthly_revenue.format_with_symbol(symbol)
        ),
        "By status:".to_string(),
    ];
    lines.extend(
        stats
            .by_status
            .iter()
            .map(|(status, count)| format!("  {:<11} {}", status.as_str(), count)),
    );
    lines.join("\n")
}

fn checkout_summary(outcome: &CheckoutOutcome, symbol: &str) -> String {
    let order = &outcome.order;
    let mut lines = vec![
        format!("Order {} placed ({})", order.reference, order.status),
        format!("  Total:    {}", order.total().format_with_symbol(symbol)),
        format!(
            "  Payment:  {}",
            order.payment_intent_id.as_deref().unwrap_or("-")
        ),
        format!("  Emails:   {} sent", outcome.notifications_sent),
    ];
    lines.extend(
        outcome
            .notification_failures
            .iter()
            .map(|failure| format!("  Warning:  {}", failure)),
    );
    lines.join("\n")
}
