use async_trait::async_trait;
use reqwest::header;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::protocol::ACTION_FIELD;
use super::NodeRpc;

/// Where a stock node listens for RPC when `rpc_enable` is set.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:7076";

// ==============================================================================
// HttpRpcClient — JSON-over-HTTP client for RaiBlocks node RPC
// ==============================================================================

/// Node RPC client bound to one endpoint and one `reqwest` connection pool.
///
/// The endpoint is not checked until the first call. Timeouts, proxies and
/// TLS settings belong on the `reqwest::Client` passed to
/// [`HttpRpcClient::with_client`]; the client built by
/// [`HttpRpcClient::new`] has none. A `reqwest::Client` is a handle to a
/// shared pool, so one connection can back any number of clients.
#[derive(Debug, Clone)]
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: String,
}

impl HttpRpcClient {
    /// Client for `endpoint`, or [`DEFAULT_ENDPOINT`] when `None` or empty,
    /// with a fresh connection pool.
    pub fn new(endpoint: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");
        Self::with_client(endpoint, client)
    }

    /// Client for `endpoint`, or [`DEFAULT_ENDPOINT`] when `None` or empty,
    /// sending through a caller-configured connection.
    pub fn with_client(endpoint: Option<&str>, client: reqwest::Client) -> Self {
        let url = endpoint
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        Self {
            client,
            url: url.to_owned(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    pub fn connection(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Default for HttpRpcClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl NodeRpc for HttpRpcClient {
    async fn send_payload(
        &self,
        payload: Map<String, Value>,
    ) -> Result<Map<String, Value>, CoreError> {
        let action = payload
            .get(ACTION_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        debug!(
            rpc.action = %action,
            rpc.fields = payload.len(),
            rpc.url = %self.url,
            "rpc call"
        );

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(RpcError::Transport)?;
        // Nodes answer errors with a JSON body too, so the status is logged
        // but never interpreted.
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.action = %action, %status, body_len = body.len(), "rpc response");
        trace!(rpc.action = %action, body = %body, "rpc response body");

        let decoded: Map<String, Value> = serde_json::from_str(&body).map_err(RpcError::Decode)?;
        Ok(decoded)
    }
}
