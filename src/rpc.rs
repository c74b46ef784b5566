//! JSON-RPC client for fetching normalized module interfaces.
//!
//! ## Endpoints
//! - Mainnet: `https://fullnode.mainnet.sui.io:443`
//! - Testnet: `https://fullnode.testnet.sui.io:443`
//!
//! The view layer only depends on the [`ModuleFetcher`] trait; swap in a
//! caching or recording implementation for tests and offline use. Retry and
//! backoff policy belongs to callers, not this client.

use crate::normalized::NormalizedModule;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Source of normalized module metadata.
pub trait ModuleFetcher {
    fn fetch_normalized_module(&self, package: &str, module: &str) -> Result<NormalizedModule>;
}

/// Blocking JSON-RPC client for a Sui fullnode.
#[derive(Clone)]
pub struct JsonRpcClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl JsonRpcClient {
    /// Default request timeout in seconds (can be overridden by env).
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds (can be overridden by env).
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    fn default_timeouts() -> (Duration, Duration) {
        let timeout_secs = std::env::var("SUI_RPC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        let connect_secs = std::env::var("SUI_RPC_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_CONNECT_TIMEOUT_SECS);
        (
            Duration::from_secs(timeout_secs),
            Duration::from_secs(connect_secs),
        )
    }

    /// Create a client for mainnet.
    pub fn mainnet() -> Self {
        Self::new("https://fullnode.mainnet.sui.io:443")
    }

    /// Create a client for testnet.
    pub fn testnet() -> Self {
        Self::new("https://fullnode.testnet.sui.io:443")
    }

    /// Create a client with a custom endpoint.
    pub fn new(endpoint: &str) -> Self {
        let (timeout, connect_timeout) = Self::default_timeouts();
        Self::with_timeouts(endpoint, timeout, connect_timeout)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(endpoint: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .timeout_connect(connect_timeout)
            .build();
        Self {
            endpoint: endpoint.to_string(),
            agent,
        }
    }

    /// Execute a JSON-RPC call and return the `result` payload.
    fn call(&self, method: &str, params: Value) -> Result<Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| anyhow!("RPC request {} failed: {}", method, e))?
            .into_json()
            .map_err(|e| anyhow!("failed to parse RPC response for {}: {}", method, e))?;

        if let Some(error) = response.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
            return Err(anyhow!("RPC error {} for {}: {}", code, method, message));
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| anyhow!("no result in RPC response for {}", method))
    }
}

impl ModuleFetcher for JsonRpcClient {
    fn fetch_normalized_module(&self, package: &str, module: &str) -> Result<NormalizedModule> {
        debug!("fetching normalized module {}::{}", package, module);
        let result = self.call(
            "sui_getNormalizedMoveModule",
            serde_json::json!([package, module]),
        )?;
        serde_json::from_value(result)
            .with_context(|| format!("parse normalized module {}::{}", package, module))
    }
}
