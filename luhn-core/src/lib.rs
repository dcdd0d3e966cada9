//! Luhn Core
//!
//! Mod-10 (Luhn) checksum validation and generation of random Luhn-valid
//! numbers for card-style identifiers.
//!
//! # Architecture
//!
//! - **Checksum**: digit-wise weighted sum, validation of integers and text
//! - **Generator**: single-draw generation inside a digit-length window, the
//!   final digit is computed rather than drawn
//! - **Config**: TOML/env settings for a reusable generator
//!
//! # Invariants
//!
//! - A number is valid iff its weighted digit sum is divisible by 10
//! - Every generated number passes [`is_valid`]
//! - Generation never retries: one random draw per number

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod checksum;
pub mod config;
pub mod error;
pub mod generator;

// Re-exports
pub use checksum::{check_digit, digit_count, is_valid, is_valid_str, luhn_sum, Multiplier};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{
    generate_luhn_from_range, generate_luhn_from_range_with, generate_random_luhn,
    generate_random_luhn_with, LuhnGenerator,
};

/// Longest number the generator produces (digits of `i64::MAX`).
///
/// At this length the window is also checked for `i64` overflow.
pub const MAX_GENERATED_LENGTH: u32 = 19;

/// Default length used by [`GeneratorConfig`] (typical card number)
pub const DEFAULT_LENGTH: u32 = 16;
