//! # PackPlanner Core
//!
//! Greedy partitioning of items into packs bounded by a unit count and a
//! cumulative weight.
//!
//! ## Core Components
//!
//! - **Input**: [`Item`] - an item type with a length, per-unit weight and quantity
//! - **Ordering**: [`SortOrder`] - how items are ordered before packing
//! - **Packer**: [`Packer`], [`pack`] - the greedy packing pass
//! - **Output**: [`Pack`], [`DistinctItem`], [`PackingSummary`]
//!
//! ## Sort Orders
//!
//! | Order | Token | Description |
//! |-------|-------|-------------|
//! | `Natural` | `NATURAL` | Items packed in input order |
//! | `ShortToLong` | `SHORT_TO_LONG` | Ascending by length |
//! | `LongToShort` | `LONG_TO_SHORT` | Descending by length |
//!
//! Both length orders are stable: items of equal length keep their input order.
//!
//! ## Example
//!
//! ```rust
//! use packplanner_core::{pack, Item, PackLimits, SortOrder};
//!
//! let items = vec![
//!     Item::new(1001, 6200, 30, 9.653),
//!     Item::new(2001, 7200, 50, 11.21),
//! ];
//! let packs = pack(SortOrder::Natural, PackLimits::new(40, 500.0), &items);
//!
//! assert_eq!(packs.len(), 2);
//! assert_eq!(packs[0].item_count, 40);
//! assert_eq!(packs[1].distinct_items[0].quantity, 40);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod item;
pub mod order;
pub mod pack;
pub mod packer;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use item::Item;
pub use order::SortOrder;
pub use pack::{DistinctItem, Pack};
pub use packer::{pack, PackLimits, Packer};
pub use result::PackingSummary;
