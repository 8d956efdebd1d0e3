use super::utils::{finish_ceremony, start_ceremony, transition};
use crate::authenticator::PlatformAuthenticator;
use crate::ceremony::config::{FINISH_REGISTRATION_PATH, START_REGISTRATION_PATH};
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{CeremonyOutcome, CeremonyState, ServerEnvelope};
use crate::codec;
use crate::transport::CeremonyTransport;

/// Run one registration ceremony: fetch options, mint a credential on the
/// platform authenticator, post the attestation back for verification.
pub(super) async fn run(
    transport: &dyn CeremonyTransport,
    authenticator: &dyn PlatformAuthenticator,
) -> Result<CeremonyOutcome, CeremonyError> {
    let state = transition(CeremonyState::Idle, CeremonyState::AwaitingServerOptions);

    let start = start_ceremony(transport, START_REGISTRATION_PATH).await?;
    let options = codec::decode_registration_options(&start.credential)?;

    let state = transition(state, CeremonyState::AwaitingPlatformResult);

    // May suspend indefinitely on the platform prompt; the platform owns
    // that timeout. On failure nothing has been sent to the server yet.
    let attestation = authenticator.create_credential(&options).await?;

    transition(state, CeremonyState::AwaitingServerVerification);

    let envelope = ServerEnvelope {
        public_key_credential: codec::encode_attestation(&attestation),
        id: start.id,
    };

    // A failure from here on leaves the credential on the authenticator:
    // the platform minted it in the previous step and the protocol offers
    // no way to roll that back. Callers must treat a failed or rejected
    // finish as "credential exists but is not registered with the server".
    finish_ceremony(transport, FINISH_REGISTRATION_PATH, &envelope).await
}
