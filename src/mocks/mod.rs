//! Mock implementations for testing.

use crate::auth::CredentialsProvider;
use crate::client::ClientInner;
use crate::config::FullContactConfig;
use crate::errors::{FcResult, FullContactError};
use crate::retry::RetryPolicy;
use crate::transport::{ApiRequest, HttpResponse, HttpTransport};
use crate::validation::Validators;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use secrecy::SecretString;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted transport that records every request it receives.
///
/// Responses are served from a FIFO script; when the script runs dry the
/// default result (if set) is repeated.
pub struct MockTransport {
    script: Mutex<VecDeque<FcResult<HttpResponse>>>,
    default: Mutex<Option<FcResult<HttpResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue the result for the next unscripted request.
    pub fn enqueue(&self, result: FcResult<HttpResponse>) {
        self.script.lock().unwrap().push_back(result);
    }

    /// Result repeated once the script is exhausted.
    pub fn set_default(&self, result: FcResult<HttpResponse>) {
        *self.default.lock().unwrap() = Some(result);
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> FcResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(result) = self.script.lock().unwrap().pop_front() {
            return result;
        }
        self.default
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| {
                Err(FullContactError::Internal {
                    message: "no scripted response left".to_string(),
                })
            })
    }
}

/// Transport that answers every request with a person body echoing the
/// request's `recordId`, for cross-talk tests.
pub struct EchoPersonTransport;

#[async_trait]
impl HttpTransport for EchoPersonTransport {
    async fn execute(&self, request: ApiRequest) -> FcResult<HttpResponse> {
        let sent: serde_json::Value =
            serde_json::from_slice(&request.body).unwrap_or(serde_json::Value::Null);
        let record_id = sent
            .get("recordId")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        let body = serde_json::json!({ "fullName": record_id }).to_string();

        Ok(HttpResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::from(body),
        })
    }
}

/// Credentials provider returning `key-1`, `key-2`, ... on successive reads.
pub struct RotatingCredentials {
    counter: AtomicUsize,
}

impl RotatingCredentials {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }
}

impl Default for RotatingCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsProvider for RotatingCredentials {
    fn api_key(&self) -> SecretString {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        SecretString::new(format!("key-{}", n))
    }
}

/// Client internals over a mock transport and a fixed API key.
pub fn inner_with_policy(
    transport: Arc<dyn HttpTransport>,
    policy: impl RetryPolicy + 'static,
) -> Arc<ClientInner> {
    inner_with(
        transport,
        policy,
        Arc::new(crate::auth::StaticCredentialsProvider::new(
            SecretString::new("fc-test-key".to_string()),
        )),
    )
}

/// Client internals over a mock transport and credentials provider.
pub fn inner_with(
    transport: Arc<dyn HttpTransport>,
    policy: impl RetryPolicy + 'static,
    credentials: Arc<dyn CredentialsProvider>,
) -> Arc<ClientInner> {
    let config = FullContactConfig::builder()
        .credentials_provider(credentials)
        .retry_policy(Arc::new(policy))
        .build()
        .unwrap();

    Arc::new(ClientInner {
        config,
        transport,
        validators: Validators::default(),
    })
}
