//! Bank service implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use fxbank_shared::{AppError, AppResult, Money};
use tracing::{debug, info, warn};

use super::commands::{AddExchangeRate, ConvertMoney, EvaluatePortfolio, SetupBank};
use super::ports::BankRepository;
use crate::bank::{Bank, BankError, ExchangeRate};

/// Bank service executing commands against the stored bank snapshot.
///
/// Writes follow load, apply, save. They are serialized through a lock owned
/// by the service, so every writer must go through the same instance.
pub struct BankService<R: BankRepository> {
    repo: Arc<R>,
    write_lock: Mutex<()>,
}

impl<R: BankRepository> BankService<R> {
    /// Create a new bank service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Set up a bank with an empty registry, replacing any existing one.
    pub fn setup_bank(&self, command: SetupBank) -> AppResult<()> {
        let _guard = self.lock_writes()?;

        if let Some(existing) = self.repo.get_bank()? {
            warn!(
                previous_pivot = %existing.pivot_currency(),
                rates = existing.len(),
                "Replacing existing bank"
            );
        }

        self.repo.save(Bank::with_pivot_currency(command.pivot_currency))?;
        info!(pivot = %command.pivot_currency, "Bank set up");
        Ok(())
    }

    /// Register an exchange rate against the pivot currency.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rate is not strictly positive (checked before anything else)
    /// - No bank has been set up
    /// - The rate is expressed in the pivot currency
    /// - The repository fails
    pub fn add_exchange_rate(&self, command: AddExchangeRate) -> AppResult<()> {
        let exchange_rate = ExchangeRate::new(command.rate, command.currency)?;

        let _guard = self.lock_writes()?;
        let bank = self.load_bank()?;
        if let Some(previous) = bank.rate(bank.pivot_currency(), command.currency) {
            warn!(
                currency = %command.currency,
                previous = %previous.rate(),
                rate = %command.rate,
                "Overwriting registered exchange rate"
            );
        }
        let updated = bank.add(exchange_rate)?;
        self.repo.save(updated)?;

        info!(
            pivot = %bank.pivot_currency(),
            currency = %command.currency,
            rate = %command.rate,
            "Exchange rate added"
        );
        Ok(())
    }

    /// Convert an amount using the current bank.
    pub fn convert(&self, command: ConvertMoney) -> AppResult<Money> {
        let bank = self.load_bank()?;
        let converted = bank.convert(Money::new(command.amount, command.from), command.to)?;

        debug!(
            from = %command.from,
            to = %command.to,
            amount = %command.amount,
            converted = %converted.amount,
            "Converted money"
        );
        Ok(converted)
    }

    /// Evaluate a portfolio using the current bank.
    pub fn evaluate_portfolio(&self, command: EvaluatePortfolio) -> AppResult<Money> {
        let bank = self.load_bank()?;
        let total = command.portfolio.evaluate(&bank, command.to)?;

        debug!(
            holdings = command.portfolio.moneys().len(),
            total = %total,
            "Evaluated portfolio"
        );
        Ok(total)
    }

    fn load_bank(&self) -> AppResult<Bank> {
        self.repo
            .get_bank()?
            .ok_or_else(|| BankError::NoBankConfigured.into())
    }

    fn lock_writes(&self) -> AppResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| AppError::Internal("Bank write lock poisoned".to_string()))
    }
}
