//! Wallet error types.

use pdex_rpc::RpcError;
use pdex_tx::TxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("building trade transaction failed: {0}")]
    Assemble(#[from] TxError),

    #[error("submitting transaction failed: {0}")]
    Submit(#[source] RpcError),

    #[error("burn address lookup failed: {0}")]
    BurnAddress(#[source] RpcError),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
