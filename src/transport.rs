//! Transport port and the default HTTP implementation.
//!
//! The SDK core only builds positional parameter lists and decodes results;
//! everything network-shaped (connections, correlation ids, timeouts, retry
//! policy) belongs behind [`Transport`]. Production code uses [`HttpTransport`]
//! over jsonrpsee; tests substitute a recording implementation.

use std::time::Duration;

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ArrayParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// JSON-RPC 2.0 request frame.
///
/// This is the exact wire shape the node dispatches on:
/// `{"jsonrpc":"2.0","method":...,"params":[...],"id":...}` with a positional
/// params array. The default transport frames requests itself (jsonrpsee owns
/// id assignment); the type is public for custom [`Transport`] implementors
/// and for byte-exact request assertions.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope {
    jsonrpc: &'static str,
    method: String,
    params: Vec<Value>,
    id: u64,
}

impl RequestEnvelope {
    pub fn new(method: impl Into<String>, params: Vec<Value>, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id,
        }
    }
}

/// Convert one typed argument into a positional JSON parameter.
///
/// Serialization failure here is a caller contract violation and is reported
/// as a construction error; nothing has been sent.
pub(crate) fn to_param<P: Serialize>(value: &P) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| ClientError::Construction(e.to_string()))
}

/// Submission port for JSON-RPC exchanges.
///
/// Implementations own connection lifecycle and request correlation. `submit`
/// resolves to the raw `result` value of a successful response; a node-side
/// error object surfaces as [`ClientError::Rpc`], network failure as
/// [`ClientError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, method: &str, params: Vec<Value>) -> Result<Value>;
}

/// HTTP transport backed by jsonrpsee.
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    /// Connect to a node RPC endpoint (e.g. `http://127.0.0.1:22000`).
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url.as_ref())
            .map_err(|e| ClientError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        tracing::debug!(method, param_count = params.len(), "submitting rpc request");

        let mut array = ArrayParams::new();
        for param in params {
            array
                .insert(param)
                .map_err(|e| ClientError::Construction(e.to_string()))?;
        }

        let result: Value = self.client.request(method, array).await?;
        Ok(result)
    }
}
