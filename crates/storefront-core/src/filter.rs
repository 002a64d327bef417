//! Admin dashboard filtering: status tab plus free-text search box.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Order, OrderStatus};

/// Dashboard filter. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Case-insensitive substring match against the reference, the customer
    /// email or "First Last". A blank search term matches everything.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        let term = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        order.reference.to_lowercase().contains(&term)
            || order.customer.email.to_lowercase().contains(&term)
            || order.customer.full_name().to_lowercase().contains(&term)
    }

    /// Matching orders, newest first.
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        let mut matched: Vec<Order> = orders
            .iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}
