//! Domain types for registry lookups.

use fxbank_shared::Currency;

/// Directional key of the rate registry.
///
/// `(A, B)` and `(B, A)` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RateKey {
    /// Currency converted from.
    pub from: Currency,
    /// Currency converted to.
    pub to: Currency,
}

impl RateKey {
    /// Creates a key for converting `from` into `to`.
    #[must_use]
    pub const fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for RateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// How a conversion between two currencies is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPath {
    /// Same currency, amount returned unchanged.
    Identity,
    /// A rate is registered for the exact pair.
    Direct,
    /// Converted into the pivot currency, then out of it.
    ThroughPivot,
}
