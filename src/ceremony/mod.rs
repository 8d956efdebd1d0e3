mod config;
mod errors;
mod main;
mod types;

pub use config::CeremonyConfig;
pub use errors::CeremonyError;
pub use main::CeremonyClient;

pub use types::{
    Assertion, AssertionResponse, Attestation, AttestationResponse, AuthenticationCredential,
    AuthenticationOptions, AuthenticatorSelection, CeremonyOutcome, CeremonyState,
    CredentialDescriptor,
    DecodedAuthenticationOptions, DecodedCredentialDescriptor, DecodedRegistrationOptions,
    DecodedUserEntity, PubKeyCredParam, RegistrationCredential, RegistrationOptions, RelyingParty,
    ServerEnvelope, UserEntity, VerificationResponse,
};
