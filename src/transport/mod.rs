//! HTTP transport abstraction.
//!
//! The transport executes exactly one request attempt and reports the raw
//! result. It never interprets status codes: a 503 is a successful
//! `HttpResponse` at this layer, and only a transport-level failure
//! (connect, timeout, body read) is an error. Retry decisions belong to the
//! dispatcher.

mod http_transport;

pub use http_transport::ReqwestTransport;

use crate::errors::FcResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use url::Url;

/// A fully assembled request attempt, produced by the request builder.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Endpoint URL
    pub url: Url,
    /// Complete header set, auth included
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Bytes,
}

/// A raw HTTP response: any status, fully read body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Fully consumed response body
    pub body: Bytes,
}

/// Transport trait for executing one POST attempt.
///
/// Implementations must be safe for concurrent use; one transport is shared
/// by every in-flight call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the request and return the raw response, whatever its status.
    async fn execute(&self, request: ApiRequest) -> FcResult<HttpResponse>;
}
