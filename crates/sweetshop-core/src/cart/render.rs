//! # Render Sync
//!
//! Projects the registry into an immutable view model for the cart panel.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  registry ──project()──► CartView { rows, itemCount,                   │
//! │  (read only)                        formattedTotal, isEmpty }          │
//! │                                                                         │
//! │  • A fresh snapshot every time; the previous view is discarded        │
//! │  • One row per line item, in insertion order                          │
//! │  • Empty cart: isEmpty = true so the panel shows its empty message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::registry::LineItemRegistry;
use crate::cart::totals::summarize;
use crate::money::Money;
use crate::types::{LineItem, ProductId};

/// One rendered line of the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplayRow {
    pub id: ProductId,
    pub title: String,
    pub image_ref: String,
    pub quantity: u32,
    /// `unit_price × quantity` rounded to two decimals.
    pub line_total: Money,
    pub formatted_line_total: String,
}

impl From<&LineItem> for DisplayRow {
    fn from(item: &LineItem) -> Self {
        let line_total = item.line_total();
        DisplayRow {
            id: item.id.clone(),
            title: item.title.clone(),
            image_ref: item.image_ref.clone(),
            quantity: item.quantity,
            line_total: line_total.rounded(),
            formatted_line_total: line_total.formatted(),
        }
    }
}

/// Snapshot handed to the panel display after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub rows: Vec<DisplayRow>,
    #[ts(type = "number")]
    pub item_count: u64,
    pub formatted_total: String,
    pub is_empty: bool,
}

impl CartView {
    /// The view of an empty cart.
    pub fn empty() -> Self {
        project(&LineItemRegistry::new())
    }
}

/// Builds the view model from the current registry state.
pub fn project(registry: &LineItemRegistry) -> CartView {
    let summary = summarize(registry);

    CartView {
        rows: registry.iter().map(DisplayRow::from).collect(),
        item_count: summary.item_count,
        formatted_total: summary.formatted_total(),
        is_empty: summary.is_empty(),
    }
}
