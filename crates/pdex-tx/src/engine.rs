//! Proof engine capability.
//!
//! The engine turns selected coins, payment outputs and trade metadata into
//! a signed, serialized transaction. Everything cryptographic happens on the
//! other side of this trait.

use crate::metadata::TradeMetadata;
use async_trait::async_trait;
use pdex_types::{Amount, Coin, PaymentInfo, Privacy};
use std::fmt;
use thiserror::Error;

/// Failure reported by the proof engine. Passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    pub code: Option<i64>,
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

/// Everything the engine needs to build a trade request transaction.
pub struct TradeTxRequest<'a> {
    pub inputs: &'a [Coin],
    pub outputs: &'a [PaymentInfo],
    pub fee: Amount,
    pub privacy: Privacy,
    pub metadata: &'a TradeMetadata,
    pub signing_key: &'a str,
}

impl fmt::Debug for TradeTxRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradeTxRequest")
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("fee", &self.fee)
            .field("privacy", &self.privacy)
            .field("metadata", &self.metadata)
            .field("signing_key", &"<redacted>")
            .finish()
    }
}

/// A transaction produced by the engine, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Serialized transaction bytes.
    pub payload: Vec<u8>,
    pub lock_time: u64,
    /// Inputs the engine actually spent, if it reports them. When present
    /// this set is authoritative over the requested inputs.
    pub consumed_inputs: Option<Vec<Coin>>,
}

/// Builds signed trade request transactions.
#[async_trait]
pub trait ProofEngine: Send + Sync {
    async fn init_trade_tx(
        &self,
        request: TradeTxRequest<'_>,
    ) -> Result<SignedTransaction, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_debug_hides_key() {
        let meta = TradeMetadata::trade_request("buy", "sell", Amount::new(1), "t", Amount::ZERO, Amount::ZERO);
        let req = TradeTxRequest {
            inputs: &[],
            outputs: &[],
            fee: Amount::new(5),
            privacy: Privacy::Disabled,
            metadata: &meta,
            signing_key: "super-secret-private-key",
        };
        let dbg = format!("{:?}", req);
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::with_code(-5, "not enough coins");
        assert_eq!(err.to_string(), "not enough coins");
        assert_eq!(err.code, Some(-5));
    }
}
