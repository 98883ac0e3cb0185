//! Transport wrapper recording metrics for every outbound call.

use anyhow::Result;
use std::time::Instant;
use tracing::{debug, warn};

use super::transport::{OutboundRequest, Response, Transport};
use crate::labels::Labeler;
use crate::metrics::CallMeter;

/// Wraps a transport and records count and duration of each call.
///
/// Calls that fail without a response are recorded with code `0`. The inner
/// result is returned untouched.
pub struct MeteredTransport<T> {
    inner: T,
    labeler: Labeler,
    meter: CallMeter,
}

impl<T: Transport> MeteredTransport<T> {
    pub fn new(inner: T, labeler: Labeler, meter: CallMeter) -> Self {
        Self {
            inner,
            labeler,
            meter,
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<T: Transport> Transport for MeteredTransport<T> {
    async fn round_trip(&self, request: OutboundRequest) -> Result<Response> {
        let method = request.method.clone();
        let path = request.uri.path().to_string();

        let start = Instant::now();
        let result = self.inner.round_trip(request).await;
        let elapsed = start.elapsed();

        let status = result.as_ref().ok().map(|response| response.status);
        let labels = self.labeler.labels(method.as_str(), &path, status);
        self.meter.record(&labels, elapsed);

        match &result {
            Ok(_) => debug!(
                component = "upstream",
                event = "call_recorded",
                apiservice = %labels.service,
                code = %labels.code,
                method = %labels.method,
                path = %labels.path,
                elapsed = ?elapsed,
                "outbound call recorded"
            ),
            Err(e) => warn!(
                component = "upstream",
                event = "call_failed",
                apiservice = %labels.service,
                method = %labels.method,
                path = %labels.path,
                error = %e,
                "outbound call failed without response"
            ),
        }

        result
    }
}
