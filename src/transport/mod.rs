mod reqwest_client;

pub use reqwest_client::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the ceremony transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a usable response (connect failure,
    /// timeout, body read error).
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP status error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("Malformed response body: {0}")]
    Body(String),
}

/// JSON transport to the relying-party server.
///
/// Paths are relative to the configured server base URL. The ceremony flows
/// only ever need a bare GET (start calls) and a JSON POST (finish calls),
/// so the trait stays that narrow.
#[async_trait]
pub trait CeremonyTransport: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}
