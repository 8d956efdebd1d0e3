//! webauthn-ceremony - client-side WebAuthn ceremony sequencing
//!
//! This crate drives the two-phase WebAuthn registration and authentication
//! ceremonies from the client side: it fetches challenge options from a
//! relying-party server, hands the decoded options to a platform credential
//! capability, re-encodes the attestation or assertion, and posts it back
//! for verification.
//!
//! The HTTP transport, the platform credential capability, and the host
//! form framework are injected through traits, so the ceremony logic runs
//! the same against a live browser stack or against test doubles.

mod authenticator;
mod ceremony;
mod codec;
mod host;
mod transport;
mod utils;

pub use authenticator::{PlatformAuthenticator, PlatformError};

pub use ceremony::{
    Assertion, AssertionResponse, Attestation, AttestationResponse, AuthenticationCredential,
    AuthenticationOptions, AuthenticatorSelection, CeremonyClient, CeremonyConfig, CeremonyError,
    CeremonyOutcome,
    CeremonyState, CredentialDescriptor, DecodedAuthenticationOptions,
    DecodedCredentialDescriptor, DecodedRegistrationOptions, DecodedUserEntity, PubKeyCredParam,
    RegistrationCredential, RegistrationOptions, RelyingParty, ServerEnvelope, UserEntity,
    VerificationResponse,
};

pub use codec::{
    decode_authentication_options, decode_registration_options, encode_assertion,
    encode_attestation,
};

pub use host::FormDataSink;

pub use transport::{CeremonyTransport, HttpTransport, TransportError};
