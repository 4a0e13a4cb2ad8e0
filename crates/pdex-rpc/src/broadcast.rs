//! Transaction submission capability.

use crate::error::RpcError;
use crate::node::NodeRpc;
use async_trait::async_trait;

/// Version byte prefixed to base58check-encoded transactions.
pub const TX_B58_VERSION: u8 = 0;

/// Submits a serialized transaction to the network.
///
/// Implementations must not retry: a transaction that may or may not have
/// reached the network is reported as an error and left to the caller.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Submit `payload` and return the transaction id assigned by the node.
    async fn send_raw_transaction(&self, payload: &[u8]) -> Result<String, RpcError>;
}

/// Base58check encoding used by the node's `sendtransaction` method.
pub fn encode_b58check(payload: &[u8]) -> String {
    bs58::encode(payload)
        .with_check_version(TX_B58_VERSION)
        .into_string()
}

#[async_trait]
impl Broadcaster for NodeRpc {
    async fn send_raw_transaction(&self, payload: &[u8]) -> Result<String, RpcError> {
        let encoded = encode_b58check(payload);
        log::debug!("submitting transaction ({} bytes)", payload.len());
        let result = self.send_transaction(&encoded).await?;
        log::info!("node accepted transaction {}", result.tx_id);
        Ok(result.tx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b58check_has_version_and_checksum() {
        let payload = b"{\"Version\":1}".to_vec();
        let encoded = encode_b58check(&payload);
        // Leading zero version byte encodes as '1'.
        assert!(encoded.starts_with('1'));

        let decoded = bs58::decode(&encoded).with_check(None).into_vec().unwrap();
        assert!(decoded.ends_with(&payload));

        let mut corrupted = encoded.into_bytes();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert!(bs58::decode(&corrupted).with_check(None).into_vec().is_err());
    }
}
