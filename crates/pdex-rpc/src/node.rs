//! Fullnode RPC methods used by the trade flow.

use crate::client::{RpcClient, RpcConfig};
use crate::error::RpcError;
use serde::Deserialize;

/// `sendtransaction` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SendTxResult {
    #[serde(rename = "TxID")]
    pub tx_id: String,
    #[serde(rename = "ShardID", default)]
    pub shard_id: Option<u8>,
}

/// Async RPC client for the fullnode.
pub struct NodeRpc {
    client: RpcClient,
}

impl NodeRpc {
    /// Create a node RPC client connected to the given URL.
    pub fn new(url: &str) -> Self {
        Self {
            client: RpcClient::new(url),
        }
    }

    /// Create with full configuration.
    pub fn with_config(config: RpcConfig) -> Self {
        Self {
            client: RpcClient::with_config(config),
        }
    }

    /// Get the underlying RPC client for custom calls.
    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    /// Submit a base58check-encoded transaction.
    ///
    /// Sent exactly once; a rejected or failed submission is returned to the
    /// caller rather than retried.
    pub async fn send_transaction(&self, encoded_tx: &str) -> Result<SendTxResult, RpcError> {
        let val = self
            .client
            .call_once("sendtransaction", serde_json::json!([encoded_tx]))
            .await?;
        let result: SendTxResult = serde_json::from_value(val)?;
        if result.tx_id.is_empty() {
            return Err(RpcError::Rejected("node returned an empty transaction id".into()));
        }
        Ok(result)
    }

    /// Ask the node for the burn address valid at `beacon_height`
    /// (0 for the current one).
    pub async fn get_burning_address(&self, beacon_height: u64) -> Result<String, RpcError> {
        let val = self
            .client
            .call("getburningaddress", serde_json::json!([beacon_height]))
            .await?;
        val.as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(RpcError::NoResult {
                context: "getburningaddress".into(),
            })
    }
}
