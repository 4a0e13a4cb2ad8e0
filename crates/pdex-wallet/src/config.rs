//! Wallet configuration, loaded from a JSON file.

use crate::error::WalletError;
use pdex_rpc::RpcConfig;
use pdex_types::constants::{DEFAULT_RPC_PORT, TRADE_REQUEST_NOTE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Upper bound on read-call retries.
pub const MAX_RETRIES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Fullnode JSON-RPC URL.
    pub node_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for read calls. Submission is never retried.
    pub retries: u32,
    /// Burn address to use instead of asking the node.
    pub burn_address: Option<String>,
    /// Pay the built-in burn address when the node lookup fails.
    pub builtin_burn_fallback: bool,
    /// Beacon height passed to the burn address lookup (0 = current).
    pub burn_address_beacon_height: u64,
    /// Annotation written to history records.
    pub history_note: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            node_url: format!("http://127.0.0.1:{}", DEFAULT_RPC_PORT),
            username: None,
            password: None,
            timeout_secs: 30,
            retries: 2,
            burn_address: None,
            builtin_burn_fallback: false,
            burn_address_beacon_height: 0,
            history_note: TRADE_REQUEST_NOTE.to_string(),
        }
    }
}

impl WalletConfig {
    /// Read a config file. Missing keys take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, WalletError> {
        let config: WalletConfig =
            serde_json::from_str(text).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), WalletError> {
        if self.node_url.trim().is_empty() {
            return Err(WalletError::Config("node_url is empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(WalletError::Config("timeout_secs must be positive".into()));
        }
        if self.retries > MAX_RETRIES {
            return Err(WalletError::Config(format!(
                "retries must be at most {}, got {}",
                MAX_RETRIES, self.retries
            )));
        }
        if matches!(&self.burn_address, Some(addr) if addr.trim().is_empty()) {
            return Err(WalletError::Config("burn_address is empty".into()));
        }
        Ok(())
    }

    pub fn to_rpc_config(&self) -> RpcConfig {
        RpcConfig {
            url: self.node_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            retries: self.retries,
            ..Default::default()
        }
    }
}
