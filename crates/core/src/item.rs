//! Input items.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item type with a requested quantity.
///
/// One input record. `weight` is the weight of a single unit; the item
/// contributes `quantity` units to the packing pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Item identifier.
    pub id: u64,
    /// Length of one unit.
    pub length: u64,
    /// Number of units requested.
    pub quantity: u64,
    /// Weight of one unit.
    pub weight: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: u64, length: u64, quantity: u64, weight: f64) -> Self {
        Self {
            id,
            length,
            quantity,
            weight,
        }
    }

    /// Validates the item.
    ///
    /// Integer fields are unsigned, so only the weight needs checking.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidWeight(self.weight));
        }
        Ok(())
    }

    /// Returns true if a single unit fits under `max_weight`.
    pub fn fits_weight(&self, max_weight: f64) -> bool {
        self.weight <= max_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Item::new(1, 10, 1, 0.0).validate().is_ok());
        assert!(Item::new(1, 10, 1, 2.5).validate().is_ok());
        assert_eq!(
            Item::new(1, 10, 1, -0.5).validate(),
            Err(Error::InvalidWeight(-0.5))
        );
        assert!(Item::new(1, 10, 1, f64::NAN).validate().is_err());
        assert!(Item::new(1, 10, 1, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_fits_weight() {
        let item = Item::new(1001, 6200, 30, 501.3);
        assert!(!item.fits_weight(500.0));
        assert!(item.fits_weight(501.3));
    }
}
