//! Currency conversion logic.
//!
//! Conversion is plain multiplication by the registered rate. No rounding is
//! applied; callers format or round the result themselves.

use fxbank_shared::{Currency, Money};

use super::error::BankError;
use super::registry::Bank;
use super::types::{ConversionPath, RateKey};

impl Bank {
    /// Selects how `from` would be converted into `to`.
    ///
    /// Checked in order:
    /// 1. Same currency
    /// 2. Direct rate (`from -> to`)
    /// 3. Through the pivot (`pivot -> from` and `pivot -> to` both registered)
    ///
    /// Returns `None` when no path exists.
    #[must_use]
    pub fn conversion_path(&self, from: Currency, to: Currency) -> Option<ConversionPath> {
        if from == to {
            Some(ConversionPath::Identity)
        } else if self.has_rate(from, to) {
            Some(ConversionPath::Direct)
        } else if self.has_rate(self.pivot_currency(), from)
            && self.has_rate(self.pivot_currency(), to)
        {
            Some(ConversionPath::ThroughPivot)
        } else {
            None
        }
    }

    /// Converts `money` into `to`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::NoRateDefined` if neither a direct nor a
    /// pivot-mediated rate is registered for the pair, and
    /// `BankError::AmountOutOfRange` if a product exceeds `Decimal` range.
    pub fn convert(&self, money: Money, to: Currency) -> Result<Money, BankError> {
        let requested = RateKey::new(money.currency, to);

        match self.conversion_path(money.currency, to) {
            Some(ConversionPath::Identity) => Ok(money),
            Some(ConversionPath::Direct) => self.convert_directly(money, to, requested),
            Some(ConversionPath::ThroughPivot) => {
                let in_pivot = self.convert_directly(money, self.pivot_currency(), requested)?;
                self.convert_directly(in_pivot, to, requested)
            }
            None => Err(BankError::NoRateDefined(requested)),
        }
    }

    fn convert_directly(
        &self,
        money: Money,
        to: Currency,
        requested: RateKey,
    ) -> Result<Money, BankError> {
        let exchange_rate = self
            .rate(money.currency, to)
            .ok_or(BankError::NoRateDefined(requested))?;

        money
            .amount
            .checked_mul(exchange_rate.rate())
            .map(|amount| Money::new(amount, to))
            .ok_or(BankError::AmountOutOfRange(requested))
    }
}
