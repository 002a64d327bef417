//! # Statistics Commands

use storefront_core::OrderStats;
use storefront_store::{OrderStore, SlotStorage};
use tracing::debug;

/// Dashboard statistics over every stored order.
pub fn get_stats<S: SlotStorage>(store: &OrderStore<S>) -> OrderStats {
    let stats = store.stats();
    debug!(total = stats.total, this_month = stats.this_month, "get_stats command");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;
    use storefront_store::StoreConfig;

    #[test]
    fn test_empty_store() {
        let stats = get_stats(&StoreConfig::in_memory().open());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_revenue, Money::zero());
    }
}
