//! Item ordering applied before packing.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::item::Item;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which items are fed to the packing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SortOrder {
    /// Items are packed in the order supplied.
    #[default]
    Natural,
    /// Ascending by length.
    ShortToLong,
    /// Descending by length.
    LongToShort,
}

impl SortOrder {
    /// All supported orders.
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Natural,
        SortOrder::ShortToLong,
        SortOrder::LongToShort,
    ];

    /// Returns the input token for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Natural => "NATURAL",
            SortOrder::ShortToLong => "SHORT_TO_LONG",
            SortOrder::LongToShort => "LONG_TO_SHORT",
        }
    }

    /// Sorts `items` in place.
    ///
    /// The sort is stable: items of equal length keep their relative input
    /// order under both length orderings.
    pub fn apply(&self, items: &mut [Item]) {
        match self {
            SortOrder::Natural => {}
            SortOrder::ShortToLong => items.sort_by_key(|item| item.length),
            SortOrder::LongToShort => items.sort_by(|a, b| b.length.cmp(&a.length)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == token)
            .ok_or_else(|| Error::InvalidSortOrder(token.to_string()))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(1001, 6200, 30, 9.653),
            Item::new(2001, 9800, 5, 11.21),
            Item::new(3001, 4800, 50, 15.33),
            Item::new(4001, 9800, 10, 4.364),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("NATURAL".parse::<SortOrder>().unwrap(), SortOrder::Natural);
        assert_eq!(
            " SHORT_TO_LONG ".parse::<SortOrder>().unwrap(),
            SortOrder::ShortToLong
        );
        assert_eq!(
            "LONG_TO_SHORT\r".parse::<SortOrder>().unwrap(),
            SortOrder::LongToShort
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "natural".parse::<SortOrder>().unwrap_err();
        assert_eq!(err, Error::InvalidSortOrder("natural".to_string()));
        assert!(err.to_string().contains("Supported values"));
    }

    #[test]
    fn test_display_round_trips() {
        for order in SortOrder::ALL {
            assert_eq!(order.to_string().parse::<SortOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_natural_keeps_order() {
        let mut list = items();
        SortOrder::Natural.apply(&mut list);
        assert_eq!(ids(&list), vec![1001, 2001, 3001, 4001]);
    }

    #[test]
    fn test_short_to_long() {
        let mut list = items();
        SortOrder::ShortToLong.apply(&mut list);
        // 2001 and 4001 share a length and stay in input order
        assert_eq!(ids(&list), vec![3001, 1001, 2001, 4001]);
    }

    #[test]
    fn test_long_to_short_is_stable() {
        let mut list = items();
        SortOrder::LongToShort.apply(&mut list);
        assert_eq!(ids(&list), vec![2001, 4001, 1001, 3001]);
    }
}
