// Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::labels::catalog::DEFAULT_ROUTES;
use crate::labels::service::{DEFAULT_API_ROOT, DEFAULT_NAMESPACE};
use crate::labels::{Labeler, PathTree, ServiceFamily, ServiceRules};
use crate::metrics::DEFAULT_SUBSYSTEM;

pub const PROD: &str = "prod";
#[allow(dead_code)]
pub const DEV: &str = "dev";
#[allow(dead_code)]
pub const TEST: &str = "test";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiMetrics {
    #[serde(rename = "apimetrics")]
    pub apimetrics: ApiMetricsBox,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiMetricsBox {
    pub env: String,
    pub logs: Option<Logs>,
    pub metrics: Option<Metrics>,
    pub labels: Option<Labels>,
    /// Route catalog, variable segments written as `-`.
    pub paths: Option<Vec<String>>,
    pub upstream: Option<Upstream>,
    #[serde(skip)]
    pub tree: Arc<PathTree>,
    #[serde(skip)]
    pub services: Arc<ServiceRules>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metrics {
    pub enabled: bool,
    pub subsystem: Option<String>,
    /// Histogram buckets of the call duration, in seconds.
    pub buckets: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Labels {
    #[serde(rename = "api_root")]
    pub api_root: Option<String>,
    pub namespace: Option<String>,
    pub services: Option<Vec<ServiceFamily>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Upstream {
    pub scheme: Option<String>,
    pub host: Option<String>,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

// Config trait
pub trait ConfigTrait {
    fn logs(&self) -> Option<&Logs>;
    fn is_prod(&self) -> bool;
    #[allow(dead_code)]
    fn is_dev(&self) -> bool;
    #[allow(dead_code)]
    fn is_test(&self) -> bool;
    fn metrics(&self) -> Option<&Metrics>;
    fn is_metrics_enabled(&self) -> bool;
    fn subsystem(&self) -> &str;
    fn upstream(&self) -> Option<&Upstream>;
    fn labeler(&self) -> Labeler;
}

// Config type alias for convenience
pub type Config = ApiMetrics;

impl ConfigTrait for Config {
    fn logs(&self) -> Option<&Logs> {
        self.apimetrics.logs.as_ref()
    }

    fn is_prod(&self) -> bool {
        self.apimetrics.env == PROD
    }

    fn is_dev(&self) -> bool {
        self.apimetrics.env == DEV
    }

    fn is_test(&self) -> bool {
        self.apimetrics.env == TEST
    }

    fn metrics(&self) -> Option<&Metrics> {
        self.apimetrics.metrics.as_ref()
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics().map(|m| m.enabled).unwrap_or(false)
    }

    fn subsystem(&self) -> &str {
        self.metrics()
            .and_then(|m| m.subsystem.as_deref())
            .unwrap_or(DEFAULT_SUBSYSTEM)
    }

    fn upstream(&self) -> Option<&Upstream> {
        self.apimetrics.upstream.as_ref()
    }

    fn labeler(&self) -> Labeler {
        Labeler::new(
            Arc::clone(&self.apimetrics.tree),
            Arc::clone(&self.apimetrics.services),
        )
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Resolve absolute path
        let abs_path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve absolute config filepath: {:?}", path))?;

        // Read file
        let data = std::fs::read_to_string(&abs_path)
            .with_context(|| format!("read config yaml file {:?}", abs_path))?;

        Self::from_yaml(&data).with_context(|| format!("load config from {:?}", abs_path))
    }

    /// Parses configuration from YAML text and builds the route tree.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let mut cfg: Config = serde_yaml::from_str(data).context("unmarshal yaml")?;
        cfg.prepare()?;
        Ok(cfg)
    }

    /// Builds the derived state (route tree, service rules) from the raw fields.
    pub fn prepare(&mut self) -> Result<()> {
        let tree = match self.apimetrics.paths {
            Some(ref paths) => PathTree::from_routes(paths),
            None => PathTree::from_routes(DEFAULT_ROUTES),
        }
        .context("build path tree")?;
        self.apimetrics.tree = Arc::new(tree);

        self.apimetrics.services = Arc::new(match self.apimetrics.labels {
            Some(ref labels) => {
                let defaults = ServiceRules::default();
                ServiceRules::new(
                    labels.api_root.as_deref().unwrap_or(DEFAULT_API_ROOT),
                    labels.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE),
                    labels
                        .services
                        .clone()
                        .unwrap_or_else(|| defaults.families().to_vec()),
                )
            }
            None => ServiceRules::default(),
        });

        if let Some(ref upstream) = self.apimetrics.upstream {
            if upstream.host.is_none() {
                anyhow::bail!("upstream.host must be configured");
            }
        }

        Ok(())
    }
}

// Test config is always available for integration tests
mod test_config;
#[allow(dead_code)]
pub use test_config::new_test_config;

#[cfg(test)]
mod config_test;
