//! Test doubles and fixtures for ceremony flow tests: a scripted transport
//! that records every request, a scripted platform authenticator, and a
//! recording form-data sink.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;

use webauthn_ceremony::{
    Assertion, Attestation, CeremonyTransport, DecodedAuthenticationOptions,
    DecodedRegistrationOptions, FormDataSink, PlatformAuthenticator, PlatformError,
    TransportError,
};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport that replays scripted responses in order and records every
/// request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Result<Value, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_response(&self) -> Result<Value, TransportError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

#[async_trait]
impl CeremonyTransport for MockTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            body: None,
        });
        self.next_response()
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            body: Some(body.clone()),
        });
        self.next_response()
    }
}

/// Platform capability that returns one scripted attestation or assertion
/// and records the decoded options it was invoked with.
#[derive(Default)]
pub struct MockAuthenticator {
    attestation: Mutex<Option<Result<Attestation, PlatformError>>>,
    assertion: Mutex<Option<Result<Assertion, PlatformError>>>,
    pub create_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub seen_registration_options: Mutex<Option<DecodedRegistrationOptions>>,
    pub seen_authentication_options: Mutex<Option<DecodedAuthenticationOptions>>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_attestation(&self, result: Result<Attestation, PlatformError>) {
        *self.attestation.lock().unwrap() = Some(result);
    }

    pub fn script_assertion(&self, result: Result<Assertion, PlatformError>) {
        *self.assertion.lock().unwrap() = Some(result);
    }
}

#[async_trait]
impl PlatformAuthenticator for MockAuthenticator {
    async fn create_credential(
        &self,
        options: &DecodedRegistrationOptions,
    ) -> Result<Attestation, PlatformError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_registration_options.lock().unwrap() = Some(options.clone());
        self.attestation
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(PlatformError::Failed("no scripted attestation".to_string())))
    }

    async fn get_credential(
        &self,
        options: &DecodedAuthenticationOptions,
    ) -> Result<Assertion, PlatformError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_authentication_options.lock().unwrap() = Some(options.clone());
        self.assertion
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(PlatformError::Failed("no scripted assertion".to_string())))
    }
}

/// Platform capability that signals when it is reached and then suspends
/// forever, simulating a prompt awaiting user interaction.
#[derive(Default)]
pub struct HangingAuthenticator {
    pub reached: Notify,
}

#[async_trait]
impl PlatformAuthenticator for HangingAuthenticator {
    async fn create_credential(
        &self,
        _options: &DecodedRegistrationOptions,
    ) -> Result<Attestation, PlatformError> {
        self.reached.notify_one();
        std::future::pending().await
    }

    async fn get_credential(
        &self,
        _options: &DecodedAuthenticationOptions,
    ) -> Result<Assertion, PlatformError> {
        self.reached.notify_one();
        std::future::pending().await
    }
}

/// Form-data sink that records every imported payload.
#[derive(Default)]
pub struct RecordingSink {
    imports: Mutex<Vec<Value>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn imports(&self) -> Vec<Value> {
        self.imports.lock().unwrap().clone()
    }
}

impl FormDataSink for RecordingSink {
    fn import_data(&self, payload: Value) {
        self.imports.lock().unwrap().push(payload);
    }
}

pub fn start_registration_body(challenge: &str, user_id: &str, ceremony_id: &str) -> Value {
    let credential = json!({
        "publicKey": {
            "challenge": challenge,
            "rp": {"id": "example.com", "name": "Example Forms"},
            "user": {"id": user_id, "name": "alice", "displayName": "Alice"},
            "pubKeyCredParams": [{"type": "public-key", "alg": -7}],
            "timeout": 60000
        }
    });
    json!({"credential": credential.to_string(), "id": ceremony_id})
}

pub fn start_authentication_body(challenge: &str, allow_ids: &[&str], ceremony_id: &str) -> Value {
    let allow: Vec<Value> = allow_ids
        .iter()
        .map(|id| json!({"type": "public-key", "id": id}))
        .collect();
    let credential = json!({
        "publicKey": {
            "challenge": challenge,
            "rpId": "example.com",
            "allowCredentials": allow
        }
    });
    json!({"credential": credential.to_string(), "id": ceremony_id})
}

pub fn verified_body() -> Value {
    json!({"verified": true})
}

pub fn verified_body_with_data(data: Value) -> Value {
    json!({"verified": true, "data": data})
}

pub fn rejected_body(reason: &str) -> Value {
    json!({"verified": false, "error": reason})
}

pub fn sample_attestation() -> Attestation {
    Attestation {
        id: "CQk".to_string(),
        raw_id: vec![9, 9],
        type_: "public-key".to_string(),
        client_data_json: br#"{"type":"webauthn.create"}"#.to_vec(),
        attestation_object: vec![0xA3, 0x01, 0x02],
    }
}

pub fn sample_assertion(user_handle: Option<Vec<u8>>) -> Assertion {
    Assertion {
        id: "CQk".to_string(),
        raw_id: vec![9, 9],
        type_: "public-key".to_string(),
        client_data_json: br#"{"type":"webauthn.get"}"#.to_vec(),
        authenticator_data: vec![1; 37],
        signature: vec![7, 7, 7],
        user_handle,
    }
}
