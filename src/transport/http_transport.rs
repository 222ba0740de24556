//! Reqwest-based transport implementation.

use super::{ApiRequest, HttpResponse, HttpTransport};
use crate::errors::{FcResult, FullContactError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Reqwest-based HTTP transport.
///
/// Connection pooling and TLS are delegated entirely to the underlying
/// `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> FcResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FullContactError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> FcResult<HttpResponse> {
        let response = self
            .client
            .post(request.url)
            .headers(request.headers)
            .body(request.body.to_vec())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        // Reading to completion releases the connection on every path.
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30));
        assert!(transport.is_ok());
    }
}
