//! Exchange rate registry and conversion engine.
//!
//! A [`Bank`] holds rates relative to a single pivot currency and converts
//! money either directly or through the pivot. Every mutation returns a new
//! snapshot; a `Bank` value never changes once built.

pub mod conversion;
pub mod error;
pub mod exchange;
pub mod registry;
pub mod types;

#[cfg(test)]
mod props;

pub use error::BankError;
pub use exchange::ExchangeRate;
pub use registry::Bank;
pub use types::{ConversionPath, RateKey};
