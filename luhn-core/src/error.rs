//! Error types for Luhn operations

use std::num::ParseIntError;
use thiserror::Error;

/// Result type for Luhn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Luhn errors
#[derive(Error, Debug)]
pub enum Error {
    /// Text could not be parsed as a signed 64-bit integer
    #[error("Malformed number {input:?}: {source}")]
    MalformedNumber {
        /// Rejected input
        input: String,
        /// Underlying parse failure
        #[source]
        source: ParseIntError,
    },

    /// Requested length is outside the supported range
    #[error("Invalid length {length}: expected 1..={max}")]
    InvalidLength {
        /// Requested length
        length: u32,
        /// Largest supported length
        max: u32,
    },

    /// Bounds are negative or out of order
    #[error("Invalid bounds: lower={lower}, upper={upper}")]
    InvalidBounds {
        /// Lower bound
        lower: i64,
        /// Upper bound
        upper: i64,
    },

    /// Numbers of the requested length from these bounds do not fit in `i64`
    #[error("Length {length} overflows i64 for bounds lower={lower}, upper={upper}")]
    Overflow {
        /// Lower bound
        lower: i64,
        /// Upper bound
        upper: i64,
        /// Requested length
        length: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
