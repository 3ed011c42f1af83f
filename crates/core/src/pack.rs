//! Packs and their distinct-item records.

use crate::item::Item;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A run of consecutive units of the same item inside one pack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistinctItem {
    pub id: u64,
    pub length: u64,
    /// Units in this run.
    pub quantity: u64,
    /// Weight of one unit.
    pub weight: f64,
}

impl DistinctItem {
    /// Starts a run holding one unit of `item`.
    pub fn first_unit(item: &Item) -> Self {
        Self {
            id: item.id,
            length: item.length,
            quantity: 1,
            weight: item.weight,
        }
    }
}

/// An output grouping of item units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pack {
    /// 1-based sequential pack number.
    pub id: usize,
    /// Runs of same-ID units, in placement order.
    pub distinct_items: Vec<DistinctItem>,
    /// Longest unit placed so far.
    pub max_length: u64,
    /// Sum of the weights of all units placed.
    pub total_weight: f64,
    /// Number of units placed.
    pub item_count: usize,
}

impl Pack {
    /// Creates an empty pack.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            distinct_items: Vec::new(),
            max_length: 0,
            total_weight: 0.0,
            item_count: 0,
        }
    }

    /// Returns true if no unit has been placed.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Places one unit of `item`.
    ///
    /// Merges into the last run when it has the same ID, otherwise starts a
    /// new run. Limits are not checked here.
    pub fn add_unit(&mut self, item: &Item) {
        self.total_weight += item.weight;
        self.item_count += 1;
        self.max_length = self.max_length.max(item.length);

        match self.distinct_items.last_mut() {
            Some(last) if last.id == item.id => last.quantity += 1,
            _ => self.distinct_items.push(DistinctItem::first_unit(item)),
        }
    }
}
