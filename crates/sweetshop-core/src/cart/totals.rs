//! # Total Aggregator
//!
//! Derives the item count and monetary total from the registry.
//!
//! Totals are recomputed from scratch on every call. There are no running
//! counters, so the summary cannot drift from the line items.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::registry::LineItemRegistry;
use crate::money::Money;

/// Cart totals returned by every mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    /// Σ quantity over all line items.
    #[ts(type = "number")]
    pub item_count: u64,
    /// Σ (unit_price × quantity), full precision.
    pub total_price: Money,
}

impl CartSummary {
    /// An empty cart's summary.
    pub const fn empty() -> Self {
        CartSummary {
            item_count: 0,
            total_price: Money::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Total rendered with two decimals, e.g. `"$20.00"`.
    pub fn formatted_total(&self) -> String {
        self.total_price.formatted()
    }
}

impl Default for CartSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes the summary of the current registry state.
pub fn summarize(registry: &LineItemRegistry) -> CartSummary {
    registry.iter().fold(CartSummary::empty(), |mut acc, item| {
        acc.item_count += u64::from(item.quantity);
        acc.total_price += item.line_total();
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductId, ProductRef};

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&LineItemRegistry::new());
        assert_eq!(summary, CartSummary::empty());
        assert!(summary.is_empty());
        assert_eq!(summary.formatted_total(), "$0.00");
    }

    #[test]
    fn test_summarize_sums_quantities_and_line_totals() {
        let mut registry = LineItemRegistry::new();
        registry
            .insert_or_increment(&ProductRef::new("Ladoo", 10.0, "", 0))
            .unwrap();
        registry
            .insert_or_increment(&ProductRef::new("Ladoo", 10.0, "", 0))
            .unwrap();
        registry
            .insert_or_increment(&ProductRef::new("Jalebi", 2.5, "", 1))
            .unwrap();

        let summary = summarize(&registry);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total_price.amount(), 22.5);
        assert_eq!(summary.formatted_total(), "$22.50");
    }

    #[test]
    fn test_total_is_not_rounded() {
        let mut registry = LineItemRegistry::new();
        registry
            .insert_or_increment(&ProductRef::new("Peda", 0.125, "", 0))
            .unwrap();
        registry.increment(&ProductId::derive("Peda", 0));

        let summary = summarize(&registry);
        assert_eq!(summary.total_price.amount(), 0.25);

        registry.increment(&ProductId::derive("Peda", 0));
        let summary = summarize(&registry);
        assert_eq!(summary.total_price.amount(), 0.375);
        assert_eq!(summary.formatted_total(), "$0.38");
    }
}
