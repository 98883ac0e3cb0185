//! Prometheus exporter wiring.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use std::sync::OnceLock;

use super::meter::REQUEST_DURATION_SUFFIX;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Builds a recorder with the call duration buckets applied, without installing it.
pub fn build_recorder(buckets: &[f64]) -> Result<PrometheusRecorder> {
    let recorder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix(REQUEST_DURATION_SUFFIX.to_string()),
            buckets,
        )
        .context("invalid request duration buckets")?
        .build_recorder();
    Ok(recorder)
}

/// Installs the Prometheus recorder as the global `metrics` recorder.
///
/// Doesn't need a tokio runtime, so it can run before one is started.
pub fn init_prometheus_exporter(buckets: &[f64]) -> Result<()> {
    let recorder = build_recorder(buckets)?;
    let handle = recorder.handle();

    metrics::set_global_recorder(recorder)
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Prometheus handle already initialized"))?;

    Ok(())
}

/// Renders the global registry in Prometheus text format.
pub fn render() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(PrometheusHandle::render)
}
