//! Bank error types.

use fxbank_shared::AppError;
use thiserror::Error;

use super::types::RateKey;

/// Errors raised by the registry and the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// A rate was expressed in the pivot currency itself.
    #[error("Can not add an exchange rate for the pivot currency")]
    PivotRateRejected,

    /// Neither a direct nor a pivot-mediated rate exists for the pair.
    #[error("No exchange rate defined for {0}")]
    NoRateDefined(RateKey),

    /// A converted or summed amount does not fit in `Decimal`.
    #[error("Converted amount out of range for {0}")]
    AmountOutOfRange(RateKey),

    /// Rate is zero or negative.
    #[error("Exchange rate should be greater than 0")]
    InvalidRate,

    /// No bank snapshot has been set up yet.
    #[error("No bank defined")]
    NoBankConfigured,

    /// One or more holdings could not be converted.
    #[error("Missing exchange rate(s): {}", bracketed(.0))]
    MissingExchangeRates(Vec<RateKey>),
}

fn bracketed(keys: &[RateKey]) -> String {
    keys.iter()
        .map(|key| format!("[{key}]"))
        .collect::<Vec<_>>()
        .join(",")
}

impl From<BankError> for AppError {
    fn from(err: BankError) -> Self {
        let message = err.to_string();
        match err {
            BankError::InvalidRate => Self::Validation(message),
            BankError::NoBankConfigured => Self::NotFound(message),
            BankError::PivotRateRejected
            | BankError::NoRateDefined(_)
            | BankError::AmountOutOfRange(_)
            | BankError::MissingExchangeRates(_) => Self::BusinessRule(message),
        }
    }
}
