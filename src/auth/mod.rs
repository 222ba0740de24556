//! Credential handling for the FullContact API.

use secrecy::{ExposeSecret, SecretString};

/// Source of the API key attached to each request attempt.
///
/// The provider is queried once per attempt, so an implementation that
/// rotates keys will have the fresh key picked up mid-retry-sequence.
/// Implementations must be safe for concurrent reads; all in-flight calls
/// share one provider.
pub trait CredentialsProvider: Send + Sync {
    /// Returns the API key to use for the next request attempt.
    fn api_key(&self) -> SecretString;
}

/// Credentials provider backed by a single fixed API key.
pub struct StaticCredentialsProvider {
    api_key: SecretString,
}

impl StaticCredentialsProvider {
    /// Create a provider that always returns the given key.
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn api_key(&self) -> SecretString {
        SecretString::new(self.api_key.expose_secret().clone())
    }
}
