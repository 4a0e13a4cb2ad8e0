//! Core types and constants for pDEX trade requests.
//!
//! Provides the checked amount ledger, the wallet's view of owned coins,
//! payment outputs, and the protocol constants shared by the transaction
//! and wallet crates.

pub mod amount;
pub mod coin;
pub mod constants;
pub mod payment;

pub use amount::{Amount, AmountError};
pub use coin::Coin;
pub use payment::{PaymentInfo, Privacy};
