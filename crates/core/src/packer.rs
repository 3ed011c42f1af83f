//! Greedy pack partitioning.

use crate::item::Item;
use crate::order::SortOrder;
use crate::pack::Pack;
use crate::result::PackingSummary;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-pack ceilings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackLimits {
    /// Maximum number of units in one pack.
    pub max_items: usize,
    /// Maximum cumulative weight of one pack.
    pub max_weight: f64,
}

impl PackLimits {
    /// Creates a new set of limits.
    pub fn new(max_items: usize, max_weight: f64) -> Self {
        Self {
            max_items,
            max_weight,
        }
    }

    /// Returns true if one more unit of `item` would push `pack` over either
    /// ceiling.
    pub fn would_exceed(&self, pack: &Pack, item: &Item) -> bool {
        pack.item_count + 1 > self.max_items || pack.total_weight + item.weight > self.max_weight
    }

    /// Returns true if a single unit of `item` fits in an empty pack.
    ///
    /// Items failing this are never placed.
    pub fn admits(&self, item: &Item) -> bool {
        self.max_items > 0 && item.fits_weight(self.max_weight)
    }
}

/// Greedy packer.
///
/// Sorts items by the configured [`SortOrder`], then walks them unit by unit,
/// closing the current pack whenever the next unit would exceed a limit.
/// The packer keeps no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct Packer {
    sort_order: SortOrder,
    limits: PackLimits,
}

impl Packer {
    /// Creates a new packer.
    pub fn new(sort_order: SortOrder, limits: PackLimits) -> Self {
        Self { sort_order, limits }
    }

    /// Partitions `items` into packs.
    ///
    /// The caller's slice is left untouched; sorting happens on a copy.
    /// Pack IDs start at 1 and follow the order packs are closed. A trailing
    /// pack is only emitted when it holds at least one unit, so an empty or
    /// fully excluded item list yields no packs at all.
    pub fn pack_items(&self, items: &[Item]) -> Vec<Pack> {
        let mut sorted = items.to_vec();
        self.sort_order.apply(&mut sorted);

        let mut packs = Vec::new();
        let mut current = Pack::new(1);

        for item in &sorted {
            if !self.limits.admits(item) {
                debug!(
                    item_id = item.id,
                    weight = item.weight,
                    max_weight = self.limits.max_weight,
                    "item cannot fit in any pack, skipping"
                );
                continue;
            }

            for _ in 0..item.quantity {
                if self.limits.would_exceed(&current, item) {
                    debug!(
                        pack_id = current.id,
                        item_count = current.item_count,
                        total_weight = current.total_weight,
                        "closing pack"
                    );
                    packs.push(current);
                    current = Pack::new(packs.len() + 1);
                }

                current.add_unit(item);
            }
        }

        if !current.is_empty() {
            packs.push(current);
        }

        packs
    }

    /// Summarizes a packing result for `items`.
    pub fn summarize(&self, items: &[Item], packs: &[Pack]) -> PackingSummary {
        PackingSummary::new(items, packs, |item| self.limits.admits(item))
    }
}

/// Partitions `items` into packs using `sort_order` and `limits`.
pub fn pack(sort_order: SortOrder, limits: PackLimits, items: &[Item]) -> Vec<Pack> {
    Packer::new(sort_order, limits).pack_items(items)
}
