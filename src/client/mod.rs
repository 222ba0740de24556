//! Client facade: one entry point per FullContact endpoint.

use crate::config::FullContactConfig;
use crate::dispatch::{dispatch, ApiResponseHandle};
use crate::errors::{FcResult, FullContactError};
use crate::response::RequestKind;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{CompanyRequest, PersonRequest, ResolveRequest};
use crate::validation::{Validator, Validators};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;

/// Shared state for all in-flight calls; read-only after construction.
pub(crate) struct ClientInner {
    pub(crate) config: FullContactConfig,
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) validators: Validators,
}

/// Asynchronous FullContact v3 API client.
///
/// Every endpoint method validates and serializes synchronously, then
/// launches the attempt sequence on a background task and returns an
/// [`ApiResponseHandle`] immediately. Rejections before dispatch are
/// delivered through the same handle, so callers consume every outcome the
/// same way. Endpoint methods must be called from within a Tokio runtime:
///
/// ```rust,no_run
/// use fullcontact::{FullContactClient, FullContactConfig, PersonRequest};
/// use secrecy::SecretString;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = FullContactConfig::builder()
///         .api_key(SecretString::new("fc-api-key".to_string()))
///         .build()?;
///     let client = FullContactClient::new(config)?;
///
///     let request = PersonRequest {
///         emails: vec!["bart@fullcontact.com".to_string()],
///         ..Default::default()
///     };
///     let outcome = client.person_enrich(&request).response().await;
///     if outcome.is_successful {
///         println!("{:?}", outcome.person);
///     }
///     Ok(())
/// }
/// ```
pub struct FullContactClient {
    inner: Arc<ClientInner>,
}

impl FullContactClient {
    /// Create a client from configuration, with the default reqwest
    /// transport and default validators.
    pub fn new(config: FullContactConfig) -> FcResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::with_parts(config, transport, Validators::default()))
    }

    /// Create a client from environment variables (see
    /// [`FullContactConfig::from_env`]).
    pub fn from_env() -> FcResult<Self> {
        Self::new(FullContactConfig::from_env()?)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: FullContactConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_parts(config, transport, Validators::default())
    }

    /// Create a client over a custom transport and validator set.
    pub fn with_parts(
        config: FullContactConfig,
        transport: Arc<dyn HttpTransport>,
        validators: Validators,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                validators,
            }),
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &FullContactConfig {
        &self.inner.config
    }

    /// Person Enrich: look up a person by email, phone, profile or id.
    pub fn person_enrich(&self, request: &PersonRequest) -> ApiResponseHandle {
        let validate = self.inner.validators.person_enrich.clone();
        self.submit(RequestKind::PersonEnrich, request, &validate)
    }

    /// Company Enrich: look up a company by domain.
    pub fn company_enrich(&self, request: &CompanyRequest) -> ApiResponseHandle {
        let validate = self.inner.validators.company_enrich.clone();
        self.submit(RequestKind::CompanyEnrich, request, &validate)
    }

    /// Company Search: search companies by name.
    pub fn company_search(&self, request: &CompanyRequest) -> ApiResponseHandle {
        let validate = self.inner.validators.company_search.clone();
        self.submit(RequestKind::CompanySearch, request, &validate)
    }

    /// Identity Map: map caller identifiers onto a record id.
    pub fn identity_map(&self, request: &ResolveRequest) -> ApiResponseHandle {
        let validate = self.inner.validators.identity_map.clone();
        self.submit(RequestKind::IdentityMap, request, &validate)
    }

    /// Identity Resolve: resolve a mapped record to its identifiers.
    pub fn identity_resolve(&self, request: &ResolveRequest) -> ApiResponseHandle {
        let validate = self.inner.validators.identity_resolve.clone();
        self.submit(RequestKind::IdentityResolve, request, &validate)
    }

    /// Identity Delete: remove a previously mapped record.
    pub fn identity_delete(&self, request: &ResolveRequest) -> ApiResponseHandle {
        let validate = self.inner.validators.identity_delete.clone();
        self.submit(RequestKind::IdentityDelete, request, &validate)
    }

    /// Validate, serialize, then hand off to the dispatcher. Any rejection
    /// here is delivered through the handle without touching the network.
    fn submit<R: Serialize>(
        &self,
        kind: RequestKind,
        request: &R,
        validate: &Validator<R>,
    ) -> ApiResponseHandle {
        if let Err(error) = (**validate)(request) {
            return ApiResponseHandle::immediate(error);
        }

        let body = match serde_json::to_vec(request) {
            Ok(bytes) => Bytes::from(bytes),
            Err(e) => {
                return ApiResponseHandle::immediate(FullContactError::Serialization {
                    message: e.to_string(),
                })
            }
        };

        dispatch(self.inner.clone(), kind, body)
    }
}
