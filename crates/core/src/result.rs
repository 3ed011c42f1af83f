//! Packing result statistics.

use std::collections::HashSet;

use crate::item::Item;
use crate::pack::Pack;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary statistics for one packed batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingSummary {
    /// Number of packs produced.
    pub packs: usize,
    /// Units requested across all items.
    pub units_requested: u64,
    /// Units placed into packs.
    pub units_placed: u64,
    /// Combined weight of all placed units.
    pub total_weight: f64,
    /// IDs of items that could not be placed in any pack.
    pub excluded: Vec<u64>,
}

impl PackingSummary {
    /// Builds a summary from the input items and the produced packs.
    ///
    /// `admitted` decides whether an item could be placed at all.
    pub fn new(items: &[Item], packs: &[Pack], admitted: impl Fn(&Item) -> bool) -> Self {
        let mut seen = HashSet::new();
        let excluded: Vec<u64> = items
            .iter()
            .filter(|item| item.quantity > 0 && !admitted(*item))
            .map(|item| item.id)
            .filter(|id| seen.insert(*id))
            .collect();

        Self {
            packs: packs.len(),
            units_requested: items.iter().map(|item| item.quantity).sum(),
            units_placed: packs.iter().map(|pack| pack.item_count as u64).sum(),
            total_weight: packs.iter().map(|pack| pack.total_weight).sum(),
            excluded,
        }
    }

    /// Returns true if every requested unit was placed.
    pub fn all_placed(&self) -> bool {
        self.units_placed == self.units_requested
    }

    /// Units that could not be placed.
    pub fn units_unplaced(&self) -> u64 {
        self.units_requested - self.units_placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PackLimits, Packer, SortOrder};

    #[test]
    fn test_summary_all_placed() {
        let items = vec![
            Item::new(1001, 6200, 30, 9.653),
            Item::new(2001, 7200, 50, 11.21),
        ];
        let packer = Packer::new(SortOrder::Natural, PackLimits::new(40, 500.0));
        let packs = packer.pack_items(&items);
        let summary = packer.summarize(&items, &packs);

        assert_eq!(summary.packs, 2);
        assert_eq!(summary.units_requested, 80);
        assert_eq!(summary.units_placed, 80);
        assert!(summary.all_placed());
        assert!(summary.excluded.is_empty());
        assert!((summary.total_weight - 850.09).abs() < 0.005);
    }

    #[test]
    fn test_summary_with_excluded() {
        let items = vec![
            Item::new(1, 100, 4, 2.0),
            Item::new(2, 100, 3, 900.0),
            Item::new(3, 100, 0, 900.0),
        ];
        let packer = Packer::new(SortOrder::Natural, PackLimits::new(10, 500.0));
        let packs = packer.pack_items(&items);
        let summary = packer.summarize(&items, &packs);

        assert_eq!(summary.packs, 1);
        assert_eq!(summary.units_unplaced(), 3);
        assert!(!summary.all_placed());
        assert_eq!(summary.excluded, vec![2]);
    }

    #[test]
    fn test_summary_lists_each_excluded_id_once() {
        let items = vec![
            Item::new(2, 100, 1, 900.0),
            Item::new(3, 100, 1, 900.0),
            Item::new(1, 100, 1, 1.0),
            Item::new(2, 100, 1, 900.0),
        ];
        let packer = Packer::new(SortOrder::Natural, PackLimits::new(10, 500.0));
        let packs = packer.pack_items(&items);
        let summary = packer.summarize(&items, &packs);

        assert_eq!(summary.excluded, vec![2, 3]);
        assert_eq!(summary.units_unplaced(), 3);
    }
}
