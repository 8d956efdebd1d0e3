use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::{CeremonyTransport, TransportError};

/// Reqwest-backed implementation of [`CeremonyTransport`].
///
/// One instance per ceremony endpoint base URL; the underlying reqwest
/// client pools connections across the start/finish call pair.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base(base_url),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::Network(format!("Invalid endpoint path {path}: {e}")))
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Ceremony endpoint returned status {}: {}", status, message);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

// Url::join resolves a relative path against the last segment, so a base of
// ".../forms/webauthn" would lose its final segment. A trailing slash keeps
// the whole base path.
fn normalize_base(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

#[async_trait]
impl CeremonyTransport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read_json(response).await
    }
}
