//! Wallet side of pDEX trade requests.
//!
//! Submits assembled trade transactions, reconciles the spend into history
//! records, and holds the account key set and wallet configuration.

pub mod config;
pub mod error;
pub mod history;
pub mod keys;
pub mod trade;

pub use config::WalletConfig;
pub use error::WalletError;
pub use history::{reconcile, HistoryRecord, HistoryStore, MemoryHistory};
pub use keys::AccountKeySet;
pub use trade::{send_trade_request, TradeClient, TradeRequest};
