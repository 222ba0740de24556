//! Per-attempt request assembly.

use crate::config::FullContactConfig;
use crate::errors::FcResult;
use crate::transport::ApiRequest;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::HeaderValue;
use secrecy::ExposeSecret;
use url::Url;

/// Assemble one POST attempt against `url`.
///
/// Called once per attempt so that the bearer token is re-read from the
/// credentials provider each time; a provider that rotates keys takes
/// effect mid-retry-sequence. Caller static headers are merged first and
/// the fixed headers win on collision.
pub(crate) fn build_request(
    url: &Url,
    body: &Bytes,
    config: &FullContactConfig,
) -> FcResult<ApiRequest> {
    let mut headers = config.headers.clone();

    let key = config.credentials.api_key();
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key.expose_secret()))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(crate::USER_AGENT));

    Ok(ApiRequest {
        url: url.clone(),
        headers,
        body: body.clone(),
    })
}
