//! Error types for packing input.

use thiserror::Error;

/// Errors raised while building packing input from raw records.
///
/// The packing pass itself never fails; these surface from parsing and
/// validation before a batch reaches the [`Packer`](crate::Packer).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Unknown sort order token.
    #[error("invalid sort order: {0}. Supported values: NATURAL, SHORT_TO_LONG, LONG_TO_SHORT")]
    InvalidSortOrder(String),

    /// A numeric field could not be parsed.
    #[error("invalid {field}: {value:?}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Raw text after trimming.
        value: String,
    },

    /// Weight is negative, NaN or infinite.
    #[error("invalid weight {0}: must be a finite, non-negative number")]
    InvalidWeight(f64),

    /// A record had the wrong number of comma-separated fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields the record type requires.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
