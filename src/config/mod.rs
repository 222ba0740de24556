//! Configuration types for the FullContact client.

use crate::auth::{CredentialsProvider, StaticCredentialsProvider};
use crate::errors::{FcResult, FullContactError};
use crate::retry::{DefaultRetryPolicy, RetryPolicy};
use crate::{DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_MILLIS, DEFAULT_TIMEOUT_SECS, FC_API_BASE_URL};
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Configuration for the FullContact client.
///
/// Built once, then shared read-only across every in-flight call.
#[derive(Clone)]
pub struct FullContactConfig {
    /// Source of the bearer token, queried fresh on every attempt
    pub credentials: Arc<dyn CredentialsProvider>,
    /// API base URL
    pub base_url: Url,
    /// Caller-supplied static headers merged into every request
    pub headers: HeaderMap,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry policy applied by the dispatcher
    pub retry: Arc<dyn RetryPolicy>,
}

impl FullContactConfig {
    /// Creates a new configuration builder
    pub fn builder() -> FullContactConfigBuilder {
        FullContactConfigBuilder::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads `FC_API_KEY` (required), `FC_BASE_URL`, `FC_TIMEOUT` (seconds),
    /// `FC_RETRY_ATTEMPTS` and `FC_RETRY_DELAY_MILLIS`.
    pub fn from_env() -> FcResult<Self> {
        let api_key = std::env::var("FC_API_KEY").map_err(|_| FullContactError::Configuration {
            message: "FC_API_KEY environment variable not set".to_string(),
        })?;

        let mut builder = Self::builder().api_key(SecretString::new(api_key));

        if let Ok(base_url) = std::env::var("FC_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Some(timeout_secs) = std::env::var("FC_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        let attempts = std::env::var("FC_RETRY_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_ATTEMPTS);
        let delay_millis = std::env::var("FC_RETRY_DELAY_MILLIS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_DELAY_MILLIS);
        builder = builder.retry_policy(Arc::new(DefaultRetryPolicy::new(
            attempts,
            Duration::from_millis(delay_millis),
        )));

        builder.build()
    }
}

/// Builder for [`FullContactConfig`]
#[derive(Default)]
pub struct FullContactConfigBuilder {
    api_key: Option<SecretString>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    base_url: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    retry: Option<Arc<dyn RetryPolicy>>,
}

impl FullContactConfigBuilder {
    /// Sets a fixed API key
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets a custom credentials provider (e.g. one that rotates keys)
    pub fn credentials_provider(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Sets the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Adds a static header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry policy
    pub fn retry_policy(mut self, policy: Arc<dyn RetryPolicy>) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Builds the configuration.
    ///
    /// A fixed API key is checked for emptiness here; a custom credentials
    /// provider is never probed at build time.
    pub fn build(self) -> FcResult<FullContactConfig> {
        let credentials = match (self.credentials, self.api_key) {
            (Some(provider), _) => provider,
            (None, Some(api_key)) => {
                if api_key.expose_secret().is_empty() {
                    return Err(FullContactError::Configuration {
                        message: "API key cannot be empty".to_string(),
                    });
                }
                Arc::new(StaticCredentialsProvider::new(api_key)) as Arc<dyn CredentialsProvider>
            }
            (None, None) => {
                return Err(FullContactError::Configuration {
                    message: "API key or credentials provider is required".to_string(),
                })
            }
        };

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(FC_API_BASE_URL))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = name.parse::<HeaderName>().map_err(|e| {
                FullContactError::Configuration {
                    message: format!("Invalid header name '{}': {}", name, e),
                }
            })?;
            let value = value.parse::<HeaderValue>().map_err(|e| {
                FullContactError::Configuration {
                    message: format!("Invalid value for header '{}': {}", name, e),
                }
            })?;
            headers.append(name, value);
        }

        Ok(FullContactConfig {
            credentials,
            base_url,
            headers,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            retry: self
                .retry
                .unwrap_or_else(|| Arc::new(DefaultRetryPolicy::default())),
        })
    }
}
