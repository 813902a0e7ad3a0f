//! HTTP transport wrapper.

use bytes::Bytes;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error};

use crate::error::Cause;

/// Thin wrapper over a shared `reqwest::Client` that bounds every call by a
/// timeout and turns non-success statuses into errors.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Starts a POST request.
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url)
    }

    /// Sends the request and reads the whole body within `limit`.
    pub async fn send(&self, request: reqwest::RequestBuilder, limit: Duration) -> Result<Bytes, Cause> {
        match timeout(limit, Self::send_inner(request)).await {
            Ok(result) => result,
            Err(_) => {
                error!(timeout_ms = limit.as_millis() as u64, "HTTP request timed out");
                Err(Cause::Timeout)
            }
        }
    }

    async fn send_inner(request: reqwest::RequestBuilder) -> Result<Bytes, Cause> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!(status = status.as_u16(), body = %body, "HTTP request rejected");
            return Err(Cause::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), len = body.len(), "HTTP response received");
        Ok(body)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> Cause {
    if e.is_timeout() {
        Cause::Timeout
    } else {
        error!(error = %e, "HTTP transport error");
        Cause::Http(e)
    }
}
