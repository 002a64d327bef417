//! # Order Statistics
//!
//! Aggregates the order collection for the admin dashboard cards.
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ Total Orders │ This Month   │ Revenue      │ Month Revenue│
//! │     total    │  this_month  │ total_revenue│monthly_revenue│
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//!   by_status: pending | processing | shipped | delivered | cancelled
//! ```
//!
//! "This month" is the calendar month of the local wall clock at call time.
//! Both `now` and each order's `created_at` are viewed in the same time zone
//! before year and month are compared.

use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, OrderStatus};

/// Per-status order counts. Every status is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Processing => self.processing,
            OrderStatus::Shipped => self.shipped,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    pub fn increment(&mut self, status: OrderStatus) {
        let slot = match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Processing => &mut self.processing,
            OrderStatus::Shipped => &mut self.shipped,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Cancelled => &mut self.cancelled,
        };
        *slot += 1;
    }

    /// `(status, count)` pairs in dashboard order.
    pub fn iter(&self) -> impl Iterator<Item = (OrderStatus, usize)> + '_ {
        OrderStatus::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Dashboard aggregate over the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    pub this_month: usize,
    pub total_revenue: Money,
    pub monthly_revenue: Money,
    pub by_status: StatusCounts,
}

impl OrderStats {
    /// Computes statistics against the local clock.
    pub fn compute(orders: &[Order]) -> Self {
        Self::compute_at(orders, Local::now())
    }

    /// Computes statistics with "this month" taken from `now`'s time zone.
    ///
    /// Every order counts towards revenue regardless of status, cancelled
    /// included.
    pub fn compute_at<Tz: TimeZone>(orders: &[Order], now: DateTime<Tz>) -> Self {
        let zone = now.timezone();
        let (year, month) = (now.year(), now.month());

        let mut stats = OrderStats {
            total: orders.len(),
            ..Default::default()
        };

        for order in orders {
            stats.total_revenue += order.total();
            stats.by_status.increment(order.status);

            let created = order.created_at.with_timezone(&zone);
            if created.year() == year && created.month() == month {
                stats.this_month += 1;
                stats.monthly_revenue += order.total();
            }
        }

        stats
    }
}
