//! Fullnode RPC client library.
//!
//! Provides an async JSON-RPC client for the fullnode, the node methods the
//! trade flow needs (transaction submission, burn address lookup), and the
//! [`Broadcaster`] capability the wallet submits through.
//!
//! # Example
//!
//! ```ignore
//! use pdex_rpc::NodeRpc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let node = NodeRpc::new("http://127.0.0.1:9334");
//!     let burn = node.get_burning_address(0).await.unwrap();
//!     println!("Burn address: {}", burn);
//! }
//! ```

pub mod broadcast;
pub mod client;
pub mod error;
pub mod node;

pub use broadcast::{encode_b58check, Broadcaster};
pub use client::{RpcClient, RpcConfig};
pub use error::RpcError;
pub use node::{NodeRpc, SendTxResult};
