//! HTTP transport - the POST capability consumed by the auth service.
//!
//! The trait is the dependency-injection seam: production code uses the
//! reqwest-backed client, tests inject per-test instances (mocks or
//! spies) with no shared process-wide state.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::errors::TransportError;

/// A received HTTP response: status, headers and raw body bytes.
///
/// Classification of the status code is the caller's job; the transport
/// reports every received response as `Ok`, however unhappy.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a bodyless response with the given status.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }
}

/// HTTP POST capability.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST a JSON body to `url`.
    ///
    /// `Err` means no response was received at all (DNS, TLS, timeout,
    /// refused connection); any response, whatever its status, is `Ok`.
    async fn post(&self, url: &str, body: serde_json::Value)
        -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestHttpClient {
    inner: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with the given request timeout.
    ///
    /// An expired timeout surfaces as a transport failure, which the
    /// auth service classifies as connectivity.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let response = self.inner.post(url).json(&body).send().await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(status, bytes = body.len(), "received authentication response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
