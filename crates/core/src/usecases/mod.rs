//! Command handling on top of a bank repository port.
//!
//! This module provides the application-facing operations:
//! - Bank setup with a pivot currency
//! - Exchange rate registration
//! - Money conversion
//! - Portfolio evaluation

mod commands;
mod ports;
mod service;

pub use commands::{AddExchangeRate, ConvertMoney, EvaluatePortfolio, SetupBank};
pub use ports::BankRepository;
pub use service::BankService;
