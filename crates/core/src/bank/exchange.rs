//! Exchange rate types and logic.

use fxbank_shared::Currency;
use rust_decimal::Decimal;

use super::error::BankError;

/// Exchange rate of a currency against the pivot.
///
/// Means "1 unit of pivot = `rate` units of `currency`". The rate is always
/// strictly positive; [`ExchangeRate::new`] is the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate {
    rate: Decimal,
    currency: Currency,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidRate` if `rate` is zero or negative.
    pub fn new(rate: Decimal, currency: Currency) -> Result<Self, BankError> {
        if rate <= Decimal::ZERO {
            return Err(BankError::InvalidRate);
        }
        Ok(Self { rate, currency })
    }

    /// Multiplicative conversion factor.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Currency the rate is expressed in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the reciprocal rate for the same currency.
    #[must_use]
    pub fn inverse(&self) -> Self {
        // rate > 0 and Decimal's smallest positive value keeps 1/rate in range.
        Self {
            rate: Decimal::ONE / self.rate,
            currency: self.currency,
        }
    }
}
