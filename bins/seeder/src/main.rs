//! Bank seeder for Fxbank development and testing.
//!
//! Sets up a bank from configuration, registers the configured exchange rates,
//! and logs which currency pairs can be converted and how.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxbank_core::usecases::{AddExchangeRate, BankRepository, BankService, ConvertMoney, SetupBank};
use fxbank_db::InMemoryBankRepository;
use fxbank_shared::{AppConfig, Currency};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repo = Arc::new(InMemoryBankRepository::new());
    let service = BankService::new(Arc::clone(&repo));

    info!("Seeding bank...");
    service.setup_bank(SetupBank {
        pivot_currency: config.bank.pivot_currency,
    })?;

    info!("Seeding exchange rates...");
    for rate in &config.bank.exchange_rates {
        if let Err(err) = service.add_exchange_rate(AddExchangeRate {
            rate: rate.rate,
            currency: rate.currency,
        }) {
            warn!(currency = %rate.currency, rate = %rate.rate, error = %err.message(), "Skipped exchange rate");
        }
    }

    let bank = repo
        .get_bank()?
        .context("Bank missing after setup")?;
    info!(
        pivot = %bank.pivot_currency(),
        rates = bank.len(),
        "Seeding complete"
    );

    for from in Currency::ALL {
        for to in Currency::ALL {
            let Some(path) = bank.conversion_path(from, to) else {
                continue;
            };
            let converted = service.convert(ConvertMoney {
                amount: Decimal::ONE,
                from,
                to,
            })?;
            info!(%from, %to, ?path, rate = %converted.amount, "Conversion available");
        }
    }

    Ok(())
}
