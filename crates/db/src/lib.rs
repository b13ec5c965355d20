//! Storage layer with bank snapshot repositories.
//!
//! This crate provides implementations of the `BankRepository` port
//! defined in `fxbank-core`.

pub mod repositories;

pub use repositories::InMemoryBankRepository;
