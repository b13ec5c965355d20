//! In-memory bank snapshot repository.

use std::sync::RwLock;

use fxbank_core::bank::Bank;
use fxbank_core::usecases::BankRepository;
use fxbank_shared::{AppError, AppResult};
use tracing::debug;

/// Holds the current bank snapshot in process memory.
///
/// Readers get a clone of the snapshot. Clones share the registry, so loading
/// does not copy the rates.
#[derive(Debug, Default)]
pub struct InMemoryBankRepository {
    snapshot: RwLock<Option<Bank>>,
}

impl InMemoryBankRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository already holding `bank`.
    #[must_use]
    pub fn with_bank(bank: Bank) -> Self {
        Self {
            snapshot: RwLock::new(Some(bank)),
        }
    }
}

fn poisoned() -> AppError {
    AppError::Internal("Bank snapshot lock poisoned".to_string())
}

impl BankRepository for InMemoryBankRepository {
    fn get_bank(&self) -> AppResult<Option<Bank>> {
        let snapshot = self.snapshot.read().map_err(|_| poisoned())?;
        debug!(present = snapshot.is_some(), "Loaded bank snapshot");
        Ok(snapshot.clone())
    }

    fn save(&self, bank: Bank) -> AppResult<()> {
        let mut snapshot = self.snapshot.write().map_err(|_| poisoned())?;
        debug!(
            pivot = %bank.pivot_currency(),
            rates = bank.len(),
            "Saved bank snapshot"
        );
        *snapshot = Some(bank);
        Ok(())
    }
}
