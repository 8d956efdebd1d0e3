//! Pure conversions between the server's base64url JSON option/response
//! shapes and the binary shapes the platform credential capability works
//! with. No state, no I/O; field presence is preserved exactly (an absent
//! user handle stays absent, it is never turned into `null` or `""`).

use serde_json::Value;

use crate::ceremony::{
    Assertion, AssertionResponse, Attestation, AttestationResponse, AuthenticationCredential,
    AuthenticationOptions, CeremonyError, DecodedAuthenticationOptions,
    DecodedCredentialDescriptor, DecodedRegistrationOptions, DecodedUserEntity,
    RegistrationCredential, RegistrationOptions,
};
use crate::utils::{base64url_decode, base64url_encode};

/// Decode the `credential` document from a start-registration response into
/// binary options for credential creation.
///
/// The document's `publicKey` member carries the options; `extensions`
/// requests are dropped (this client never relays extension results back to
/// the server either).
pub fn decode_registration_options(
    credential_json: &str,
) -> Result<DecodedRegistrationOptions, CeremonyError> {
    let options: RegistrationOptions = parse_public_key(credential_json, "registration")?;

    if options.extensions.is_some() {
        tracing::warn!("Dropping unsupported extensions from registration options");
    }

    let challenge = decode_field(&options.challenge, "challenge")?;
    let user_id = decode_field(&options.user.id, "user.id")?;

    let exclude_credentials = options
        .exclude_credentials
        .unwrap_or_default()
        .into_iter()
        .map(|descriptor| {
            Ok(DecodedCredentialDescriptor {
                type_: descriptor.type_,
                id: decode_field(&descriptor.id, "excludeCredentials[].id")?,
            })
        })
        .collect::<Result<Vec<_>, CeremonyError>>()?;

    Ok(DecodedRegistrationOptions {
        challenge,
        rp: options.rp,
        user: DecodedUserEntity {
            id: user_id,
            name: options.user.name,
            display_name: options.user.display_name,
        },
        pub_key_cred_params: options.pub_key_cred_params,
        timeout: options.timeout,
        attestation: options.attestation,
        authenticator_selection: options.authenticator_selection,
        exclude_credentials,
    })
}

/// Decode the `credential` document from a start-authentication response
/// into binary options for credential retrieval.
///
/// An absent or empty allow-list is preserved as empty, which asks the
/// platform for any discoverable credential.
pub fn decode_authentication_options(
    credential_json: &str,
) -> Result<DecodedAuthenticationOptions, CeremonyError> {
    let options: AuthenticationOptions = parse_public_key(credential_json, "authentication")?;

    if options.extensions.is_some() {
        tracing::warn!("Dropping unsupported extensions from authentication options");
    }

    let challenge = decode_field(&options.challenge, "challenge")?;

    let allow_credentials = options
        .allow_credentials
        .unwrap_or_default()
        .into_iter()
        .map(|descriptor| {
            Ok(DecodedCredentialDescriptor {
                type_: descriptor.type_,
                id: decode_field(&descriptor.id, "allowCredentials[].id")?,
            })
        })
        .collect::<Result<Vec<_>, CeremonyError>>()?;

    Ok(DecodedAuthenticationOptions {
        challenge,
        rp_id: options.rp_id,
        timeout: options.timeout,
        user_verification: options.user_verification,
        allow_credentials,
    })
}

/// Re-encode an attestation to the base64url wire shape for the
/// finish-registration endpoint.
pub fn encode_attestation(attestation: &Attestation) -> RegistrationCredential {
    RegistrationCredential {
        id: attestation.id.clone(),
        raw_id: base64url_encode(&attestation.raw_id),
        type_: attestation.type_.clone(),
        response: AttestationResponse {
            client_data_json: base64url_encode(&attestation.client_data_json),
            attestation_object: base64url_encode(&attestation.attestation_object),
        },
    }
}

/// Re-encode an assertion to the base64url wire shape for the
/// finish-authentication endpoint. An absent user handle produces no
/// `userHandle` field at all.
pub fn encode_assertion(assertion: &Assertion) -> AuthenticationCredential {
    AuthenticationCredential {
        id: assertion.id.clone(),
        raw_id: base64url_encode(&assertion.raw_id),
        type_: assertion.type_.clone(),
        response: AssertionResponse {
            client_data_json: base64url_encode(&assertion.client_data_json),
            authenticator_data: base64url_encode(&assertion.authenticator_data),
            signature: base64url_encode(&assertion.signature),
            user_handle: assertion
                .user_handle
                .as_ref()
                .map(|handle| base64url_encode(handle)),
        },
    }
}

fn parse_public_key<T: serde::de::DeserializeOwned>(
    credential_json: &str,
    kind: &str,
) -> Result<T, CeremonyError> {
    let document: Value = serde_json::from_str(credential_json)
        .map_err(|e| CeremonyError::Protocol(format!("Invalid {kind} credential JSON: {e}")))?;

    let public_key = document
        .get("publicKey")
        .ok_or_else(|| CeremonyError::Protocol(format!("Missing publicKey in {kind} options")))?;

    serde_json::from_value(public_key.clone())
        .map_err(|e| CeremonyError::Protocol(format!("Malformed {kind} options: {e}")))
}

fn decode_field(encoded: &str, field: &str) -> Result<Vec<u8>, CeremonyError> {
    base64url_decode(encoded)
        .map_err(|_| CeremonyError::Protocol(format!("Field {field} is not valid base64url")))
}
