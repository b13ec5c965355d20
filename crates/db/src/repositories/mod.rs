//! Repository implementations for data access.
//!
//! Repositories provide a clean interface for storage operations,
//! hiding the implementation details from the rest of the application.

pub mod bank;

pub use bank::InMemoryBankRepository;
