//! Bank aggregate and its exchange rate registry.

use std::collections::HashMap;
use std::sync::Arc;

use fxbank_shared::Currency;
use tracing::debug;

use super::error::BankError;
use super::exchange::ExchangeRate;
use super::types::RateKey;

/// Immutable snapshot of a bank: a pivot currency and its registered rates.
///
/// The registry is shared between clones; [`Bank::add`] builds a fresh map,
/// so a snapshot handed out earlier never observes later registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pivot_currency: Currency,
    exchange_rates: Arc<HashMap<RateKey, ExchangeRate>>,
}

impl Bank {
    /// Creates a bank with an empty registry.
    #[must_use]
    pub fn with_pivot_currency(pivot_currency: Currency) -> Self {
        Self {
            pivot_currency,
            exchange_rates: Arc::new(HashMap::new()),
        }
    }

    /// Registers a rate against the pivot currency.
    ///
    /// On success the returned bank holds `pivot -> currency` (the rate as
    /// given) and `currency -> pivot` (its reciprocal). Registering a currency
    /// again replaces both entries.
    ///
    /// # Errors
    ///
    /// Returns `BankError::PivotRateRejected` if the rate is expressed in the
    /// pivot currency.
    pub fn add(&self, exchange_rate: ExchangeRate) -> Result<Self, BankError> {
        let currency = exchange_rate.currency();
        if currency == self.pivot_currency {
            return Err(BankError::PivotRateRejected);
        }

        let outbound = RateKey::new(self.pivot_currency, currency);
        let inbound = RateKey::new(currency, self.pivot_currency);

        if let Some(previous) = self.exchange_rates.get(&outbound) {
            debug!(
                pair = %outbound,
                previous = %previous.rate(),
                rate = %exchange_rate.rate(),
                "Replacing registered exchange rate"
            );
        }

        let mut exchange_rates = HashMap::clone(&self.exchange_rates);
        exchange_rates.insert(outbound, exchange_rate);
        exchange_rates.insert(inbound, exchange_rate.inverse());

        Ok(Self {
            pivot_currency: self.pivot_currency,
            exchange_rates: Arc::new(exchange_rates),
        })
    }

    /// The pivot currency fixed at construction.
    #[must_use]
    pub const fn pivot_currency(&self) -> Currency {
        self.pivot_currency
    }

    /// Looks up the rate registered for converting `from` into `to`.
    #[must_use]
    pub fn rate(&self, from: Currency, to: Currency) -> Option<&ExchangeRate> {
        self.exchange_rates.get(&RateKey::new(from, to))
    }

    /// Returns true if a rate is registered for the exact pair.
    #[must_use]
    pub fn has_rate(&self, from: Currency, to: Currency) -> bool {
        self.exchange_rates.contains_key(&RateKey::new(from, to))
    }

    /// Iterates over every registered directional rate, in no particular order.
    pub fn exchange_rates(&self) -> impl Iterator<Item = (RateKey, ExchangeRate)> + '_ {
        self.exchange_rates.iter().map(|(key, rate)| (*key, *rate))
    }

    /// Number of directional entries in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchange_rates.len()
    }

    /// Returns true if no rate has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchange_rates.is_empty()
    }
}
