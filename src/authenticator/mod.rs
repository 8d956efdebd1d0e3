use async_trait::async_trait;
use thiserror::Error;

use crate::ceremony::{
    Assertion, Attestation, DecodedAuthenticationOptions, DecodedRegistrationOptions,
};

/// Errors reported by the platform credential capability.
///
/// The distinction between a dismissal and a genuine authenticator failure
/// matters to callers: a dismissal is a user decision, not a fault.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The user dismissed the credential prompt.
    #[error("User dismissed the authenticator prompt")]
    Cancelled,

    /// No credential on this platform satisfies the request.
    #[error("No credential available for this request")]
    NoCredential,

    /// Any other platform-level ceremony failure, e.g. a credential that is
    /// already registered with the authenticator.
    #[error("Authenticator failure: {0}")]
    Failed(String),
}

/// The platform credential capability (`navigator.credentials` in a
/// browser host, a CTAP client elsewhere).
///
/// Both calls may suspend indefinitely while the platform waits for user
/// interaction; the platform owns that timeout, not this crate.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Mint a new credential from decoded registration options
    /// (credential-creation, `webauthn.create`).
    async fn create_credential(
        &self,
        options: &DecodedRegistrationOptions,
    ) -> Result<Attestation, PlatformError>;

    /// Produce an assertion for decoded authentication options
    /// (credential-retrieval, `webauthn.get`).
    async fn get_credential(
        &self,
        options: &DecodedAuthenticationOptions,
    ) -> Result<Assertion, PlatformError>;
}
