use serde::Serialize;

use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{
    CeremonyOutcome, CeremonyState, ServerEnvelope, StartResponse, VerificationResponse,
};
use crate::transport::CeremonyTransport;

/// Log a ceremony state transition and yield the new state. The flows are
/// strictly sequential, so the state only exists to make progress and
/// failure points observable in the logs.
pub(super) fn transition(from: CeremonyState, to: CeremonyState) -> CeremonyState {
    tracing::debug!("Ceremony state: {:?} -> {:?}", from, to);
    to
}

/// Fetch and parse the start payload for a ceremony. The returned
/// [`StartResponse::id`] must be echoed back unchanged on the finish call.
pub(super) async fn start_ceremony(
    transport: &dyn CeremonyTransport,
    path: &str,
) -> Result<StartResponse, CeremonyError> {
    let body = transport.get_json(path).await?;

    let start: StartResponse = serde_json::from_value(body)
        .map_err(|e| CeremonyError::Protocol(format!("Malformed start response: {e}")))?;

    tracing::debug!("Ceremony started, id: {}", start.id);
    Ok(start)
}

/// Post the finish envelope and interpret the server's verification
/// verdict. `verified: false` is a completed-but-rejected ceremony, not an
/// error.
pub(super) async fn finish_ceremony<C: Serialize>(
    transport: &dyn CeremonyTransport,
    path: &str,
    envelope: &ServerEnvelope<C>,
) -> Result<CeremonyOutcome, CeremonyError> {
    let body = serde_json::to_value(envelope)
        .map_err(|e| CeremonyError::Protocol(format!("Failed to serialize envelope: {e}")))?;

    let response = transport.post_json(path, &body).await?;

    let verification: VerificationResponse = serde_json::from_value(response)
        .map_err(|e| CeremonyError::Server(format!("Malformed verification response: {e}")))?;

    if verification.verified {
        transition(
            CeremonyState::AwaitingServerVerification,
            CeremonyState::Verified,
        );
        Ok(CeremonyOutcome::Verified {
            data: verification.data,
        })
    } else {
        transition(
            CeremonyState::AwaitingServerVerification,
            CeremonyState::Rejected,
        );
        tracing::debug!("Server rejected the ceremony: {:?}", verification.error);
        Ok(CeremonyOutcome::Rejected {
            reason: verification.error,
        })
    }
}
