use std::sync::Arc;

use tokio::sync::Mutex;

use super::{auth, register};
use crate::authenticator::PlatformAuthenticator;
use crate::ceremony::config::CeremonyConfig;
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::CeremonyOutcome;
use crate::host::FormDataSink;
use crate::transport::{CeremonyTransport, HttpTransport};

/// Sequences WebAuthn ceremonies between the relying-party server and the
/// platform credential capability.
///
/// One client instance serves one form field. At most one ceremony is in
/// flight per instance; a second activation while one is pending fails with
/// [`CeremonyError::CeremonyInFlight`] before touching the network or the
/// platform. This is the command handler the host form framework invokes on
/// button activation and whose result it awaits.
pub struct CeremonyClient {
    transport: Arc<dyn CeremonyTransport>,
    authenticator: Arc<dyn PlatformAuthenticator>,
    data_sink: Arc<dyn FormDataSink>,
    in_flight: Mutex<()>,
}

impl CeremonyClient {
    pub fn new(
        transport: Arc<dyn CeremonyTransport>,
        authenticator: Arc<dyn PlatformAuthenticator>,
        data_sink: Arc<dyn FormDataSink>,
    ) -> Self {
        Self {
            transport,
            authenticator,
            data_sink,
            in_flight: Mutex::new(()),
        }
    }

    /// Build a client with the reqwest transport derived from `config`.
    pub fn with_config(
        config: &CeremonyConfig,
        authenticator: Arc<dyn PlatformAuthenticator>,
        data_sink: Arc<dyn FormDataSink>,
    ) -> Result<Self, CeremonyError> {
        let transport = HttpTransport::new(config.server_url.clone(), config.request_timeout)?;
        Ok(Self::new(Arc::new(transport), authenticator, data_sink))
    }

    /// Run a registration ceremony.
    ///
    /// A failure or rejection after the platform prompt does not remove the
    /// newly minted credential from the authenticator; the protocol has no
    /// rollback for that step. The credential then exists on the device but
    /// is unknown to the server.
    pub async fn register(&self) -> Result<CeremonyOutcome, CeremonyError> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| CeremonyError::CeremonyInFlight)?;

        let result = register::run(self.transport.as_ref(), self.authenticator.as_ref()).await;
        if let Err(e) = &result {
            tracing::error!("Registration ceremony failed: {e}");
        }
        result
    }

    /// Run an authentication ceremony.
    ///
    /// On a verified outcome that carries an application data payload, the
    /// payload is pushed into the host's data-import capability exactly
    /// once before the outcome is returned.
    pub async fn authenticate(&self) -> Result<CeremonyOutcome, CeremonyError> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| CeremonyError::CeremonyInFlight)?;

        let result = auth::run(self.transport.as_ref(), self.authenticator.as_ref()).await;
        match &result {
            Ok(CeremonyOutcome::Verified { data: Some(payload) }) => {
                tracing::debug!("Importing authentication data payload into form");
                self.data_sink.import_data(payload.clone());
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Authentication ceremony failed: {e}"),
        }
        result
    }
}
