use super::utils::{finish_ceremony, start_ceremony, transition};
use crate::authenticator::PlatformAuthenticator;
use crate::ceremony::config::{FINISH_AUTHENTICATION_PATH, START_AUTHENTICATION_PATH};
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{CeremonyOutcome, CeremonyState, ServerEnvelope};
use crate::codec;
use crate::transport::CeremonyTransport;

/// Run one authentication ceremony: fetch options (the allow-list may be
/// empty, requesting any discoverable credential), obtain an assertion from
/// the platform, post it back for verification.
pub(super) async fn run(
    transport: &dyn CeremonyTransport,
    authenticator: &dyn PlatformAuthenticator,
) -> Result<CeremonyOutcome, CeremonyError> {
    let state = transition(CeremonyState::Idle, CeremonyState::AwaitingServerOptions);

    let start = start_ceremony(transport, START_AUTHENTICATION_PATH).await?;
    let options = codec::decode_authentication_options(&start.credential)?;

    let state = transition(state, CeremonyState::AwaitingPlatformResult);

    let assertion = authenticator.get_credential(&options).await?;

    transition(state, CeremonyState::AwaitingServerVerification);

    let envelope = ServerEnvelope {
        public_key_credential: codec::encode_assertion(&assertion),
        id: start.id,
    };

    finish_ceremony(transport, FINISH_AUTHENTICATION_PATH, &envelope).await
}
