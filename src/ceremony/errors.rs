use thiserror::Error;

use crate::authenticator::PlatformError;
use crate::transport::TransportError;
use crate::utils::UtilError;

/// Errors that can terminate a WebAuthn ceremony.
///
/// Every variant is terminal for the in-flight ceremony; nothing is retried
/// automatically. The caller may start a fresh ceremony afterwards.
#[derive(Debug, Error)]
pub enum CeremonyError {
    /// Error related to ceremony configuration (e.g. an unusable server URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure reaching the ceremony endpoints
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered, but with a non-2xx status or an unreadable body
    #[error("Server error: {0}")]
    Server(String),

    /// The user dismissed the platform credential prompt
    #[error("User cancelled the authenticator prompt")]
    UserCancelled,

    /// Authentication was requested but no usable credential exists
    #[error("No credential available for this request")]
    NoCredentialAvailable,

    /// Platform-level ceremony failure (e.g. credential already registered)
    #[error("Authenticator error: {0}")]
    Authenticator(String),

    /// The server payload is missing expected fields or carries
    /// un-decodable binary fields
    #[error("Protocol mismatch: {0}")]
    Protocol(String),

    /// A ceremony is already in flight on this client instance
    #[error("A ceremony is already in flight for this field")]
    CeremonyInFlight,

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl From<TransportError> for CeremonyError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => Self::Network(msg),
            TransportError::Status { status, message } => {
                Self::Server(format!("status {status}: {message}"))
            }
            TransportError::Body(msg) => Self::Server(format!("malformed response: {msg}")),
        }
    }
}

impl From<PlatformError> for CeremonyError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::Cancelled => Self::UserCancelled,
            PlatformError::NoCredential => Self::NoCredentialAvailable,
            PlatformError::Failed(msg) => Self::Authenticator(msg),
        }
    }
}
