//! Hyper-based implementation of the outbound transport.

use anyhow::{Context, Result};
use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::Request;
use std::time::Duration;
use tokio::time::timeout;

use super::transport::{OutboundRequest, Response, Transport, TransportError};
use crate::http::client::{create_client, HyperClient};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends requests through a pooled hyper client, one timeout per call.
pub struct HyperTransport {
    client: HyperClient,
    timeout: Duration,
}

impl HyperTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: create_client(),
            timeout,
        }
    }

    pub fn with_client(client: HyperClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait::async_trait]
impl Transport for HyperTransport {
    async fn round_trip(&self, request: OutboundRequest) -> Result<Response> {
        let uri_str = request.uri.to_string();

        let mut builder = Request::builder()
            .method(request.method)
            .uri(request.uri);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let req_body: BoxBody<Bytes, hyper::Error> = match request.body {
            Some(body) => Full::new(body)
                .map_err(|never: std::convert::Infallible| match never {})
                .boxed(),
            None => Empty::<Bytes>::new()
                .map_err(|never: std::convert::Infallible| match never {})
                .boxed(),
        };

        let req = builder
            .body(req_body)
            .with_context(|| format!("build request to {}", uri_str))?;

        let response = match timeout(self.timeout, self.client.request(req)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                tracing::error!(
                    component = "upstream",
                    event = "request_failed",
                    uri = %uri_str,
                    error = %e,
                    error_debug = ?e,
                    "Hyper client request failed"
                );
                return Err(TransportError::Request {
                    uri: uri_str,
                    source: e,
                }
                .into());
            }
            Err(_) => {
                tracing::warn!(
                    component = "upstream",
                    event = "request_timeout",
                    uri = %uri_str,
                    timeout = ?self.timeout,
                    "Request timed out"
                );
                return Err(TransportError::Timeout {
                    uri: uri_str,
                    timeout: self.timeout,
                }
                .into());
            }
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let body = response
            .into_body()
            .collect()
            .await
            .context("Failed to read response body")?
            .to_bytes();

        Ok(Response::new(status, headers, body))
    }
}
