//! Trade request transaction construction.
//!
//! Selects coins, builds the burn-address payment plan and the trade
//! metadata, and hands the result to an injected [`ProofEngine`] that
//! produces the signed transaction.

pub mod assembler;
pub mod engine;
pub mod metadata;
pub mod payment;
pub mod selection;

pub use assembler::{assemble_trade_tx, AssembledTrade, TradeOrder, TradeTxParams};
pub use engine::{EngineError, ProofEngine, SignedTransaction, TradeTxRequest};
pub use metadata::{TradeMetadata, TradeMetadataBuilder};
pub use payment::PaymentPlan;
pub use selection::{select_coins, CoinSelection};

use pdex_types::{Amount, AmountError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TxError {
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("insufficient funds: need {need}, have {have}")]
    InsufficientFunds { need: Amount, have: Amount },

    #[error("trade metadata field not set: {0}")]
    MissingField(&'static str),

    #[error("no payment outputs")]
    NoOutputs,

    #[error("inputs {inputs} do not equal outputs {outputs} + fee {fee} + change {change}")]
    Conservation {
        inputs: Amount,
        outputs: Amount,
        fee: Amount,
        change: Amount,
    },

    #[error("proof engine error: {0}")]
    ProofEngine(#[from] EngineError),
}
