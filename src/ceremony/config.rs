use std::env;
use std::time::Duration;

use url::Url;

use super::errors::CeremonyError;

pub(crate) const START_REGISTRATION_PATH: &str = "/start-registration";
pub(crate) const FINISH_REGISTRATION_PATH: &str = "/finish-registration";
pub(crate) const START_AUTHENTICATION_PATH: &str = "/start-authentication";
pub(crate) const FINISH_AUTHENTICATION_PATH: &str = "/finish-authentication";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the ceremony client's server connection.
///
/// The client is embedded in a host application, so configuration is an
/// explicit value rather than process-global state. `from_env` offers the
/// env-var path for hosts that configure through the environment.
#[derive(Debug, Clone)]
pub struct CeremonyConfig {
    /// Base URL the four ceremony endpoint paths are joined onto
    pub server_url: Url,
    /// Per-request timeout for the start/finish HTTP calls. This does not
    /// bound the platform prompt; the platform owns that limit.
    pub request_timeout: Duration,
}

impl CeremonyConfig {
    pub fn new(server_url: Url) -> Self {
        Self {
            server_url,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Build a configuration from `WEBAUTHN_SERVER_URL` and
    /// `WEBAUTHN_REQUEST_TIMEOUT` (seconds). The URL is required; an
    /// invalid timeout falls back to the default with a warning.
    pub fn from_env() -> Result<Self, CeremonyError> {
        dotenvy::dotenv().ok();

        let raw_url = env::var("WEBAUTHN_SERVER_URL")
            .map_err(|_| CeremonyError::Config("WEBAUTHN_SERVER_URL must be set".to_string()))?;

        let server_url = Url::parse(&raw_url).map_err(|e| {
            CeremonyError::Config(format!("Invalid WEBAUTHN_SERVER_URL {raw_url}: {e}"))
        })?;

        let request_timeout = match env::var("WEBAUTHN_REQUEST_TIMEOUT") {
            Ok(v) => match v.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(
                        "Invalid WEBAUTHN_REQUEST_TIMEOUT: {}. Using default {}s",
                        v,
                        DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            server_url,
            request_timeout,
        })
    }
}
