//! Property-based tests for the bank.
//!
//! - Identity conversion
//! - Pivot currency rejection
//! - Reciprocal rates
//! - Pivot-mediated conversion
//! - Snapshot immutability

use fxbank_shared::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::BankError;
use super::exchange::ExchangeRate;
use super::registry::Bank;
use super::types::{ConversionPath, RateKey};

/// Strategy to generate decimal amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate any supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to generate two distinct currencies.
fn distinct_currencies() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to generate three distinct currencies.
fn three_distinct_currencies() -> impl Strategy<Value = (Currency, Currency, Currency)> {
    (currency(), currency(), currency())
        .prop_filter("currencies must differ", |(a, b, c)| a != b && b != c && a != c)
}

/// Relative tolerance for results that pass through a 28-digit reciprocal.
fn approx_eq(actual: Decimal, expected: Decimal) -> bool {
    let tolerance = expected.abs().max(Decimal::ONE) * Decimal::new(1, 18);
    (actual - expected).abs() <= tolerance
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting into the currency already held returns the money unchanged,
    /// whatever the registry holds.
    #[test]
    fn prop_identity_conversion(
        amount in amount(),
        pivot in currency(),
        held in currency(),
        registered in proptest::option::of((positive_rate(), currency())),
    ) {
        let mut bank = Bank::with_pivot_currency(pivot);
        if let Some((rate, rate_currency)) = registered {
            if rate_currency != pivot {
                bank = bank.add(ExchangeRate::new(rate, rate_currency).unwrap()).unwrap();
            }
        }

        let money = Money::new(amount, held);
        prop_assert_eq!(bank.convert(money, held), Ok(money));
    }

    /// A rate expressed in the pivot currency is never admitted.
    #[test]
    fn prop_pivot_rate_rejected(pivot in currency(), rate in positive_rate()) {
        let bank = Bank::with_pivot_currency(pivot);
        let result = bank.add(ExchangeRate::new(rate, pivot).unwrap());
        prop_assert_eq!(result, Err(BankError::PivotRateRejected));
    }

    /// Every successful add stores exactly the rate and its reciprocal.
    #[test]
    fn prop_add_inserts_two_entries(
        (pivot, other) in distinct_currencies(),
        rate in positive_rate(),
    ) {
        let bank = Bank::with_pivot_currency(pivot)
            .add(ExchangeRate::new(rate, other).unwrap())
            .unwrap();

        prop_assert_eq!(bank.len(), 2);
        prop_assert_eq!(bank.rate(pivot, other).map(ExchangeRate::rate), Some(rate));
        prop_assert_eq!(
            bank.rate(other, pivot).map(ExchangeRate::rate),
            Some(Decimal::ONE / rate)
        );
    }

    /// 1 X -> pivot yields 1/r and 1 pivot -> X yields r.
    #[test]
    fn prop_reciprocal_rates(
        (pivot, other) in distinct_currencies(),
        rate in positive_rate(),
    ) {
        let bank = Bank::with_pivot_currency(pivot)
            .add(ExchangeRate::new(rate, other).unwrap())
            .unwrap();

        let to_pivot = bank.convert(Money::new(Decimal::ONE, other), pivot).unwrap();
        prop_assert_eq!(to_pivot.currency, pivot);
        prop_assert!(approx_eq(to_pivot.amount, Decimal::ONE / rate));

        let from_pivot = bank.convert(Money::new(Decimal::ONE, pivot), other).unwrap();
        prop_assert_eq!(from_pivot, Money::new(rate, other));
    }

    /// Without a direct rate, money routes through the pivot.
    #[test]
    fn prop_pivot_mediated_conversion(
        (pivot, from, to) in three_distinct_currencies(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
        amount in amount(),
    ) {
        let bank = Bank::with_pivot_currency(pivot)
            .add(ExchangeRate::new(from_rate, from).unwrap())
            .unwrap()
            .add(ExchangeRate::new(to_rate, to).unwrap())
            .unwrap();

        prop_assert_eq!(bank.conversion_path(from, to), Some(ConversionPath::ThroughPivot));

        let converted = bank.convert(Money::new(amount, from), to).unwrap();
        prop_assert_eq!(converted.currency, to);
        prop_assert_eq!(converted.amount, amount * (Decimal::ONE / from_rate) * to_rate);
    }

    /// Conversion fails exactly when no path exists.
    #[test]
    fn prop_convert_agrees_with_path(
        pivot in currency(),
        registered in prop::collection::vec((positive_rate(), currency()), 0..4),
        (from, to) in distinct_currencies(),
    ) {
        let bank = registered
            .into_iter()
            .filter(|(_, c)| *c != pivot)
            .fold(Bank::with_pivot_currency(pivot), |bank, (rate, c)| {
                bank.add(ExchangeRate::new(rate, c).unwrap()).unwrap()
            });

        let result = bank.convert(Money::new(Decimal::ONE, from), to);
        match bank.conversion_path(from, to) {
            Some(_) => prop_assert!(result.is_ok()),
            None => prop_assert_eq!(
                result,
                Err(BankError::NoRateDefined(RateKey::new(from, to)))
            ),
        }
    }

    /// The bank returned by add never changes the receiver.
    #[test]
    fn prop_add_leaves_original_untouched(
        (pivot, other) in distinct_currencies(),
        first in positive_rate(),
        second in positive_rate(),
    ) {
        let original = Bank::with_pivot_currency(pivot)
            .add(ExchangeRate::new(first, other).unwrap())
            .unwrap();
        let snapshot = original.clone();

        let updated = original.add(ExchangeRate::new(second, other).unwrap()).unwrap();

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(
            original.convert(Money::new(Decimal::ONE, pivot), other).unwrap(),
            Money::new(first, other)
        );
        prop_assert_eq!(
            updated.convert(Money::new(Decimal::ONE, pivot), other).unwrap(),
            Money::new(second, other)
        );
    }
}
