//! Base JSON-RPC HTTP client for the fullnode.
//!
//! The node speaks a JSON-RPC 1.0 dialect: requests are POSTed to the base
//! URL and responses carry capitalised `Result` / `Error` members.
//! [`RpcClient::call`] retries transient failures with exponential backoff;
//! [`RpcClient::call_once`] never retries and is what submission uses.

use crate::error::RpcError;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(rename = "Result", default)]
    result: Option<Value>,
    #[serde(rename = "Error", default)]
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    #[serde(rename = "Code", default)]
    code: i64,
    #[serde(rename = "Message", default)]
    message: String,
}

/// Configuration for an RPC client.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Base URL (e.g., `http://127.0.0.1:9334`).
    pub url: String,
    /// Optional username for Basic auth.
    pub username: Option<String>,
    /// Optional password for Basic auth.
    pub password: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Number of retry attempts on transient failure (read calls only).
    pub retries: u32,
    /// Initial delay between retries (doubles each attempt).
    pub retry_delay: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: format!("http://127.0.0.1:{}", pdex_types::constants::DEFAULT_RPC_PORT),
            username: None,
            password: None,
            timeout: Duration::from_secs(30),
            retries: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Async JSON-RPC client.
pub struct RpcClient {
    http: reqwest::Client,
    config: RpcConfig,
    headers: HeaderMap,
    request_id: AtomicU64,
}

impl RpcClient {
    /// Create a new client with the given URL.
    pub fn new(url: &str) -> Self {
        Self::with_config(RpcConfig {
            url: url.to_string(),
            ..Default::default()
        })
    }

    /// Create a new client with full configuration.
    pub fn with_config(mut config: RpcConfig) -> Self {
        config.url = config.url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self {
            http,
            headers: request_headers(&config),
            config,
            request_id: AtomicU64::new(1),
        }
    }

    /// Get the configured base URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Call a method, retrying transient failures up to `config.retries` times.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        self.send(method, params, self.config.retries).await
    }

    /// Call a method exactly once. Used for non-idempotent calls.
    pub async fn call_once(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        self.send(method, params, 0).await
    }

    async fn send(&self, method: &str, params: Value, retries: u32) -> Result<Value, RpcError> {
        let request = JsonRpcRequest {
            jsonrpc: "1.0",
            id: self.next_id(),
            method,
            params,
        };

        let mut delay = self.config.retry_delay;
        let mut retried = 0u32;
        loop {
            match self.post(&request).await {
                Err(e) if e.is_transient() && retried < retries => {
                    retried += 1;
                    log::debug!("{} failed ({}), retry {}/{} in {:?}", method, e, retried, retries, delay);
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                }
                result => return result,
            }
        }
    }

    async fn post(&self, request: &JsonRpcRequest<'_>) -> Result<Value, RpcError> {
        let url = self.config.url.as_str();
        let method = request.method;
        let transport = |source: reqwest::Error| RpcError::Http {
            method: method.to_string(),
            url: url.to_string(),
            source,
        };

        let resp = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(RpcError::AuthFailed { url: url.to_string() });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::HttpStatus {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let body: JsonRpcResponse = resp.json().await.map_err(transport)?;
        parse_response(body, method)
    }
}

/// Content type plus Basic auth when both credentials are configured.
fn request_headers(config: &RpcConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let (Some(user), Some(pass)) = (&config.username, &config.password) {
        let token = base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", user, pass));
        match HeaderValue::from_str(&format!("Basic {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => log::warn!("dropping unusable RPC credentials: {}", e),
        }
    }
    headers
}

fn parse_response(body: JsonRpcResponse, method: &str) -> Result<Value, RpcError> {
    if let Some(err) = body.error {
        return Err(RpcError::Rpc {
            code: err.code,
            message: err.message,
            method: method.to_string(),
        });
    }

    match body.result {
        Some(Value::Null) | None => Err(RpcError::NoResult {
            context: method.to_string(),
        }),
        Some(val) => Ok(val),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: Value) -> Result<Value, RpcError> {
        let body: JsonRpcResponse = serde_json::from_value(json).unwrap();
        parse_response(body, "sendtransaction")
    }

    #[test]
    fn test_config_default() {
        let config = RpcConfig::default();
        assert_eq!(config.url, "http://127.0.0.1:9334");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retries, 2);
    }

    #[test]
    fn test_client_url() {
        let client = RpcClient::new("http://example.com:9334/");
        assert_eq!(client.url(), "http://example.com:9334");
    }

    #[test]
    fn test_request_ids_increment() {
        let client = RpcClient::new("http://127.0.0.1:9334");
        let id1 = client.next_id();
        let id2 = client.next_id();
        assert_eq!(id2, id1 + 1);
    }

    #[test]
    fn test_basic_auth_header() {
        let config = RpcConfig {
            username: Some("user".into()),
            password: Some("pass".into()),
            ..Default::default()
        };
        let headers = request_headers(&config);
        assert_eq!(headers[AUTHORIZATION], "Basic dXNlcjpwYXNz");
        assert_eq!(headers[CONTENT_TYPE], "application/json");

        let anonymous = request_headers(&RpcConfig::default());
        assert!(anonymous.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_retries_stop_at_limit() {
        let client = RpcClient::with_config(RpcConfig {
            url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(2),
            retries: 2,
            retry_delay: Duration::from_millis(1),
            ..Default::default()
        });
        let err = client
            .call("getburningaddress", serde_json::json!([0]))
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Http { .. }));
        assert_eq!(client.next_id(), 2);
    }

    #[tokio::test]
    async fn test_call_once_ignores_retries() {
        let client = RpcClient::with_config(RpcConfig {
            url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(2),
            retries: u32::MAX,
            retry_delay: Duration::MAX,
            ..Default::default()
        });
        let err = client
            .call_once("sendtransaction", serde_json::json!(["abc"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Http { .. }));
    }

    #[test]
    fn test_request_envelope() {
        let req = JsonRpcRequest {
            jsonrpc: "1.0",
            id: 7,
            method: "sendtransaction",
            params: serde_json::json!(["abc"]),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["jsonrpc"], "1.0");
        assert_eq!(json["method"], "sendtransaction");
        assert_eq!(json["params"][0], "abc");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_parse_result() {
        let val = parse(serde_json::json!({
            "Id": 1,
            "Result": { "TxID": "ab12" },
            "Error": null
        }))
        .unwrap();
        assert_eq!(val["TxID"], "ab12");
    }

    #[test]
    fn test_parse_error() {
        let err = parse(serde_json::json!({
            "Id": 1,
            "Result": null,
            "Error": { "Code": -1003, "Message": "tx is double spend", "StackTrace": "" }
        }))
        .unwrap_err();
        match err {
            RpcError::Rpc { code, message, method } => {
                assert_eq!(code, -1003);
                assert_eq!(message, "tx is double spend");
                assert_eq!(method, "sendtransaction");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_result() {
        let err = parse(serde_json::json!({ "Id": 1 })).unwrap_err();
        assert!(matches!(err, RpcError::NoResult { .. }));
    }
}
