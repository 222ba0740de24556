//! # FullContact v3 API Client
//!
//! Asynchronous Rust client for the FullContact v3 API: person enrichment,
//! company enrichment and search, and identity map/resolve/delete.
//!
//! ## Features
//!
//! - One background task and one single-shot result handle per call
//! - Bounded retry with jitter-free exponential backoff
//! - Pluggable retry policy, transport, credentials and validators
//! - Credential re-read on every attempt (key rotation mid-retry works)
//! - Typed response payloads chosen by the endpoint that was called
//! - Secure credential handling with `SecretString`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fullcontact::{FullContactClient, FullContactConfig, PersonRequest};
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FullContactConfig::builder()
//!         .api_key(SecretString::new("fc-api-key".to_string()))
//!         .build()?;
//!     let client = FullContactClient::new(config)?;
//!
//!     // Or create from environment variables
//!     // let client = FullContactClient::from_env()?;
//!
//!     let request = PersonRequest {
//!         emails: vec!["bart@fullcontact.com".to_string()],
//!         ..Default::default()
//!     };
//!     let outcome = client.person_enrich(&request).response().await;
//!     println!("successful: {}", outcome.is_successful);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Client facade, one entry point per endpoint
//! - `config` - Configuration types and builder
//! - `auth` - Credential provider trait and static provider
//! - `retry` - Retry policy and backoff schedule
//! - `dispatch` - Attempt loop and the single-shot result handle
//! - `response` - Request kinds and response classification
//! - `transport` - HTTP transport trait and reqwest implementation
//! - `types` - Request/response value objects
//! - `validation` - Per-endpoint request validators
//! - `errors` - Error types and taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod response;
pub mod retry;
pub mod transport;
pub mod types;
pub mod validation;

// Internal modules
mod request;

// Development/testing modules
#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
pub(crate) mod mocks;

// Re-exports for convenience
pub use auth::{CredentialsProvider, StaticCredentialsProvider};
pub use client::FullContactClient;
pub use config::{FullContactConfig, FullContactConfigBuilder};
pub use dispatch::ApiResponseHandle;
pub use errors::{FcResult, FullContactError};
pub use response::{ApiResponse, RequestKind, FC_TEST_TYPE_HEADER};
pub use retry::{DefaultRetryPolicy, RetryPolicy, ATTEMPT_CEILING};
pub use transport::{ApiRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    CompanyRequest, CompanyResponse, CompanySearchResult, Location, PersonName, PersonRequest,
    PersonResponse, Profile, ResolveRequest, ResolveResponse,
};
pub use validation::{Validator, Validators};

/// The default FullContact API base URL
pub const FC_API_BASE_URL: &str = "https://api.fullcontact.com";

/// User-Agent header sent with every request
pub const USER_AGENT: &str = "FullContact_Rust_Client_V1.0.0";

/// The default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The default number of retry attempts beyond the first try
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 1;

/// The default base delay for exponential backoff, in milliseconds
pub const DEFAULT_RETRY_DELAY_MILLIS: u64 = 1000;
