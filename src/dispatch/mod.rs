//! Bounded retry dispatch loop and the single-shot result handle.
//!
//! One dispatched call is one spawned task driving a strictly sequential
//! attempt loop. Exactly one [`ApiResponse`] is produced per call and
//! delivered through a oneshot channel; backoff sleeps and network I/O
//! happen on the spawned task, never on the caller.

use crate::client::ClientInner;
use crate::errors::{FcResult, FullContactError};
use crate::request::build_request;
use crate::response::{classify, ApiResponse, RequestKind};
use crate::retry::{clamped_attempts, delay_for_attempt, RetryPolicy};
use crate::transport::HttpResponse;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

/// Handle to one in-flight call.
///
/// Yields the terminal [`ApiResponse`] exactly once. The core imposes no
/// deadline of its own; race [`response`](Self::response) against
/// `tokio::time::timeout` for an overall bound. Dropping the handle does
/// not cancel the attempt sequence.
pub struct ApiResponseHandle {
    rx: oneshot::Receiver<ApiResponse>,
}

impl ApiResponseHandle {
    /// Wait for the terminal outcome of the call.
    pub async fn response(self) -> ApiResponse {
        self.rx.await.unwrap_or_else(|_| {
            ApiResponse::from_error(FullContactError::Internal {
                message: "dispatch task dropped before delivering an outcome".to_string(),
            })
        })
    }

    /// Handle already holding a local failure (validation, serialization).
    ///
    /// Keeps the consumption path uniform: rejections before dispatch are
    /// read the same way as dispatched outcomes.
    pub(crate) fn immediate(error: FullContactError) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(ApiResponse::from_error(error));
        Self { rx }
    }
}

/// Launch the attempt sequence for one call on a background task.
pub(crate) fn dispatch(
    inner: Arc<ClientInner>,
    kind: RequestKind,
    body: Bytes,
) -> ApiResponseHandle {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = run_attempts(&inner, kind, body).await;
        // The receiver may already be gone; the outcome is then discarded.
        let _ = tx.send(outcome);
    });
    ApiResponseHandle { rx }
}

/// The full attempt sequence: first try, then bounded backoff retries.
///
/// The loop is the iterative form of the retry state machine: the counter
/// is clamped to [`crate::retry::ATTEMPT_CEILING`] and each pass rebuilds
/// the request so a rotated credential is picked up. Once the budget is
/// spent, the last transport error or the last received response is
/// terminal as-is.
async fn run_attempts(inner: &ClientInner, kind: RequestKind, body: Bytes) -> ApiResponse {
    let url = match kind.url(&inner.config.base_url) {
        Ok(url) => url,
        Err(error) => return ApiResponse::from_error(error),
    };

    let policy = inner.config.retry.as_ref();
    let budget = clamped_attempts(policy);
    debug!(endpoint = kind.endpoint_path(), "dispatching request");

    let mut last = attempt(inner, &url, &body).await;
    let mut attempts_done: u32 = 0;

    while attempts_done < budget && retry_eligible(policy, &last) {
        attempts_done += 1;
        let delay = delay_for_attempt(policy.base_delay(), attempts_done);
        warn!(
            endpoint = kind.endpoint_path(),
            attempt = attempts_done,
            delay_ms = delay.as_millis() as u64,
            "retrying request"
        );
        tokio::time::sleep(delay).await;
        last = attempt(inner, &url, &body).await;
    }

    debug!(
        endpoint = kind.endpoint_path(),
        attempts = attempts_done + 1,
        "request terminal"
    );
    classify(kind, last)
}

/// One attempt: build the request (fresh credential) and execute it.
async fn attempt(inner: &ClientInner, url: &Url, body: &Bytes) -> FcResult<HttpResponse> {
    let request = build_request(url, body, &inner.config)?;
    inner.transport.execute(request).await
}

/// Transport errors are retry-eligible; received responses defer to the
/// policy. Local construction errors are terminal immediately.
fn retry_eligible(policy: &dyn RetryPolicy, last: &FcResult<HttpResponse>) -> bool {
    match last {
        Ok(response) => policy.should_retry(response.status),
        Err(error) => error.is_retryable(),
    }
}
