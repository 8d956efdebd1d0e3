use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the start-registration and start-authentication endpoints.
///
/// `credential` is a JSON document serialized as a string; its `publicKey`
/// member carries the actual options. `id` correlates the later finish call
/// with this start call and must be echoed back unchanged.
#[derive(Deserialize, Debug)]
pub(crate) struct StartResponse {
    pub(crate) credential: String,
    pub(crate) id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RelyingParty {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Wire-side user entity with a base64url-encoded id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PubKeyCredParam {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

/// Wire-side credential reference (exclude/allow lists) with a base64url id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CredentialDescriptor {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: String,
}

/// Registration options as issued by the server (the `publicKey` member of
/// the start-registration `credential` document). Binary fields are still
/// base64url strings here; [`crate::decode_registration_options`] produces
/// the binary form the platform capability consumes.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOptions {
    pub challenge: String,
    pub rp: RelyingParty,
    pub user: UserEntity,
    #[serde(default)]
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    #[serde(default)]
    pub timeout: Option<u32>,
    #[serde(default)]
    pub attestation: Option<String>,
    #[serde(default)]
    pub authenticator_selection: Option<AuthenticatorSelection>,
    #[serde(default)]
    pub exclude_credentials: Option<Vec<CredentialDescriptor>>,
    /// Extension requests are not supported and are dropped during decoding.
    #[serde(default)]
    pub extensions: Option<Value>,
}

/// Authentication options as issued by the server. An empty or absent
/// allow-list requests any discoverable credential (passkey flow).
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationOptions {
    pub challenge: String,
    #[serde(default)]
    pub rp_id: Option<String>,
    #[serde(default)]
    pub timeout: Option<u32>,
    #[serde(default)]
    pub user_verification: Option<String>,
    #[serde(default)]
    pub allow_credentials: Option<Vec<CredentialDescriptor>>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

/// User entity with the id decoded to bytes for the platform capability.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedUserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCredentialDescriptor {
    pub type_: String,
    pub id: Vec<u8>,
}

/// Registration options with challenge, user id, and exclusion ids decoded
/// to bytes, ready for credential creation.
#[derive(Debug, Clone)]
pub struct DecodedRegistrationOptions {
    pub challenge: Vec<u8>,
    pub rp: RelyingParty,
    pub user: DecodedUserEntity,
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    pub timeout: Option<u32>,
    pub attestation: Option<String>,
    pub authenticator_selection: Option<AuthenticatorSelection>,
    pub exclude_credentials: Vec<DecodedCredentialDescriptor>,
}

/// Authentication options with challenge and allow-list ids decoded to
/// bytes, ready for credential retrieval.
#[derive(Debug, Clone)]
pub struct DecodedAuthenticationOptions {
    pub challenge: Vec<u8>,
    pub rp_id: Option<String>,
    pub timeout: Option<u32>,
    pub user_verification: Option<String>,
    pub allow_credentials: Vec<DecodedCredentialDescriptor>,
}

/// Attestation produced by the platform capability on registration.
/// Binary fields stay binary here; the attestation object is opaque to the
/// client (its encoding is authenticator-specific and only the relying
/// party parses it).
#[derive(Debug, Clone, PartialEq)]
pub struct Attestation {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub type_: String,
    pub client_data_json: Vec<u8>,
    pub attestation_object: Vec<u8>,
}

/// Assertion produced by the platform capability on authentication.
/// `user_handle` is absent for non-discoverable credentials and its absence
/// must survive re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub type_: String,
    pub client_data_json: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

/// Base64url re-encoding of an [`Attestation`] for the finish-registration
/// endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCredential {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub response: AttestationResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttestationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
}

/// Base64url re-encoding of an [`Assertion`] for the finish-authentication
/// endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationCredential {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub response: AssertionResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssertionResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: String,
    pub signature: String,
    #[serde(
        rename = "userHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_handle: Option<String>,
}

/// Body of the finish-registration and finish-authentication endpoints:
/// the re-encoded credential plus the ceremony id from the start call.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServerEnvelope<C> {
    pub public_key_credential: C,
    pub id: String,
}

/// Verification outcome reported by the finish endpoints. `data` is the
/// optional application payload a verified authentication may carry.
#[derive(Deserialize, Debug, Clone)]
pub struct VerificationResponse {
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Progress of a single ceremony instance. Terminal states end the
/// instance; a new activation starts a fresh ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyState {
    Idle,
    AwaitingServerOptions,
    AwaitingPlatformResult,
    AwaitingServerVerification,
    Verified,
    Rejected,
    Failed,
}

/// Result of a ceremony that ran to completion. A server-side rejection is
/// a completed ceremony, not an error; transport, platform, and protocol
/// faults surface as [`super::CeremonyError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CeremonyOutcome {
    Verified { data: Option<Value> },
    Rejected { reason: Option<String> },
}
