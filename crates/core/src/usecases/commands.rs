//! Commands accepted by the bank service.

use fxbank_shared::Currency;
use rust_decimal::Decimal;

use crate::portfolio::Portfolio;

/// Set up a bank with the given pivot currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupBank {
    /// Pivot currency of the new bank.
    pub pivot_currency: Currency,
}

/// Register `rate` units of `currency` per unit of pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddExchangeRate {
    /// Conversion factor, must be strictly positive.
    pub rate: Decimal,
    /// Currency the rate is expressed in.
    pub currency: Currency,
}

/// Convert `amount` of `from` into `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertMoney {
    /// Amount to convert.
    pub amount: Decimal,
    /// Currency the amount is held in.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

/// Evaluate a portfolio in `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatePortfolio {
    /// Holdings to evaluate.
    pub portfolio: Portfolio,
    /// Currency of the total.
    pub to: Currency,
}
