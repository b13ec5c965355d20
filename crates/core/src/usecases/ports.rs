//! Persistence port for bank snapshots.

use fxbank_shared::AppResult;

use crate::bank::Bank;

/// Repository trait for bank persistence.
///
/// This trait is implemented by the db crate to provide actual storage.
pub trait BankRepository: Send + Sync {
    /// Load the current bank snapshot, if one has been set up.
    fn get_bank(&self) -> AppResult<Option<Bank>>;

    /// Store `bank` as the current snapshot.
    fn save(&self, bank: Bank) -> AppResult<()>;
}
