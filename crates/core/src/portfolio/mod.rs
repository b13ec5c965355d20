//! Multi-currency holdings evaluated through a bank.

use fxbank_shared::{Currency, Money};

use crate::bank::{Bank, BankError, RateKey};

/// An immutable collection of amounts in possibly different currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    moneys: Vec<Money>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new portfolio holding `money` in addition to the current holdings.
    #[must_use]
    pub fn add(&self, money: Money) -> Self {
        let mut moneys = self.moneys.clone();
        moneys.push(money);
        Self { moneys }
    }

    /// Holdings in insertion order.
    #[must_use]
    pub fn moneys(&self) -> &[Money] {
        &self.moneys
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    /// Converts every holding into `to` and sums them.
    ///
    /// # Errors
    ///
    /// Returns `BankError::MissingExchangeRates` listing every holding that
    /// could not be converted, in portfolio order, and
    /// `BankError::AmountOutOfRange` if a conversion or the total exceeds
    /// `Decimal` range.
    pub fn evaluate(&self, bank: &Bank, to: Currency) -> Result<Money, BankError> {
        let mut converted = Vec::with_capacity(self.moneys.len());
        let mut missing: Vec<RateKey> = Vec::new();

        for money in &self.moneys {
            match bank.convert(*money, to) {
                Ok(amount) => converted.push((money.currency, amount.amount)),
                Err(BankError::NoRateDefined(key)) => missing.push(key),
                Err(err) => return Err(err),
            }
        }

        if !missing.is_empty() {
            return Err(BankError::MissingExchangeRates(missing));
        }

        converted
            .into_iter()
            .try_fold(Money::zero(to), |mut total, (from, amount)| {
                total.amount = total
                    .amount
                    .checked_add(amount)
                    .ok_or(BankError::AmountOutOfRange(RateKey::new(from, to)))?;
                Ok(total)
            })
    }
}
