//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client Error
///
/// Splits failures by where they happened: before the wire (`Construction`),
/// on the wire (`Connection`, `Transport`), at the node (`Rpc`), or while
/// reading the node's answer (`Decode`).
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required parameter was missing or could not be serialized.
    /// Raised locally; nothing was sent.
    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON-RPC error object returned by the node.
    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    /// The node accepted the call but the result did not match the
    /// expected shape. Distinct from a null result, which decodes to `None`.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<jsonrpsee::core::ClientError> for ClientError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => ClientError::Rpc {
                code: call_err.code(),
                message: call_err.message().to_string(),
            },
            jsonrpsee::core::ClientError::Transport(e) => {
                ClientError::Transport(format!("Transport error: {}", e))
            }
            jsonrpsee::core::ClientError::RequestTimeout => {
                ClientError::Transport("Request timed out".to_string())
            }
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                ClientError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => ClientError::Decode(e.to_string()),
            _ => ClientError::Other(e.to_string()),
        }
    }
}
