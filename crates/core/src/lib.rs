//! Core business logic for Fxbank.
//!
//! This crate contains pure business logic with ZERO storage or transport dependencies.
//! All domain types, registration rules, and conversions live here.
//!
//! # Modules
//!
//! - `bank` - Exchange rate registry and conversion engine
//! - `portfolio` - Multi-currency holdings evaluated through a bank
//! - `usecases` - Command handling on top of a bank repository port

pub mod bank;
pub mod portfolio;
pub mod usecases;
