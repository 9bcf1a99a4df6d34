//! Geographic lookup tables for vital-records exchange.
//!
//! Fixed-width mortality formats carry coded geography (two-letter state
//! codes, FIPS county and place codes, country codes) while the canonical
//! record carries human-readable names. This crate owns the translation.
//!
//! A [`GeoRegistry`] is loaded once, at startup or lazily memoized by the
//! caller, and shared read-only across concurrent encode/decode calls.
//! Lookups are pure and never allocate on the hit path.

mod error;
mod registry;
mod tables;

pub use error::{GeoError, Result};
pub use registry::GeoRegistry;
