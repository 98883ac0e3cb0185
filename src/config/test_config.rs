use super::{ApiMetricsBox, Config};
use std::sync::Arc;
use std::time::Duration;

/// Creates a new test configuration.
pub fn new_test_config() -> Config {
    let mut cfg = Config {
        apimetrics: ApiMetricsBox {
            env: super::TEST.to_string(),
            logs: Some(super::Logs {
                level: Some("debug".to_string()),
            }),
            metrics: Some(super::Metrics {
                enabled: true,
                subsystem: Some("api_outbound".to_string()),
                buckets: Some(vec![0.1, 1.0, 10.0, 30.0]),
            }),
            labels: None,
            paths: None,
            upstream: Some(super::Upstream {
                scheme: Some("http".to_string()),
                host: Some("localhost:8090".to_string()),
                timeout: Some(Duration::from_secs(5)),
            }),
            tree: Arc::default(),
            services: Arc::default(),
        },
    };
    cfg.prepare().expect("built-in route catalog must be valid");
    cfg
}
