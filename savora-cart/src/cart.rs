use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;

/// Persisted snapshot schema version; bump when the layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The basket aggregate: lines in insertion order plus derived totals.
///
/// `total_cents` and `item_count` are maintained by recomputation from
/// the lines after every mutation; they are never written independently,
/// so they cannot drift from their sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub items: Vec<LineItem>,
    pub total_cents: i64,
    /// Sum of line quantities, not the number of lines.
    pub item_count: u32,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn recalculate(&mut self) {
        self.total_cents = self.items.iter().map(|line| line.subtotal_cents).sum();
        self.item_count = self.items.iter().map(|line| line.quantity).sum();
    }
}

/// On-disk layout: the whole cart under one key, overwritten on every
/// mutation. The version tag plus typed decoding reject any snapshot
/// whose shape no longer matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub version: u32,
    pub items: Vec<LineItem>,
    pub total_cents: i64,
    pub item_count: u32,
}

impl CartSnapshot {
    pub fn of(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items: cart.items.clone(),
            total_cents: cart.total_cents,
            item_count: cart.item_count,
        }
    }
}
