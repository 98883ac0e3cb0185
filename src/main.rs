// Main entrypoint for the apimetrics command line tool.

use apimetrics::config::{Config, ConfigTrait};
use apimetrics::labels::REQUEST_LABEL_NAMES;
use apimetrics::metrics::{exporter, CallMeter, DEFAULT_BUCKETS};
use apimetrics::upstream::{HyperTransport, MeteredTransport, OutboundRequest, Transport};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hyper::Method;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

const CONFIG_PATH: &str = "cfg/apimetrics.cfg.yaml";
const CONFIG_PATH_LOCAL: &str = "cfg/apimetrics.cfg.local.yaml";
const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// apimetrics - bounded metric labels for outbound API calls
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, value_name = "FILE")]
    cfg: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the labels computed for a request
    Label {
        method: String,
        path: String,
        /// Response status, omit for a call that got no response
        #[arg(long)]
        status: Option<u16>,
    },
    /// Sends a metered request to the configured upstream and prints the metrics
    Call { method: String, path: String },
}

/// Loads the configuration struct from YAML file.
/// Tries local config first, then falls back to default config.
fn load_cfg(path: Option<PathBuf>) -> Result<Config> {
    if let Some(custom_path) = path {
        return Config::load(&custom_path)
            .with_context(|| format!("failed to load custom config from {:?}", custom_path));
    }

    // Try local config first
    match Config::load(PathBuf::from(CONFIG_PATH_LOCAL)) {
        Ok(cfg) => Ok(cfg),
        Err(_) => Config::load(PathBuf::from(CONFIG_PATH))
            .with_context(|| format!("failed to load config from {}", CONFIG_PATH)),
    }
}

/// Configures structured logging based on configuration.
fn configure_logger(cfg: &Config) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let log_level = cfg
        .logs()
        .and_then(|logs| logs.level.as_ref())
        .map(|s| s.as_str())
        .unwrap_or("debug");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if cfg.is_prod() {
        // Production: JSON format
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Development: Pretty console format
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

fn print_labels(method: &str, path: &str, status: Option<u16>, cfg: &Config) {
    let labels = cfg.labeler().labels(method, path, status);
    for (name, value) in labels.pairs() {
        println!("{name}={value:?}");
    }
}

async fn call(cfg: &Config, method: &str, path: &str) -> Result<()> {
    let upstream = cfg.upstream().context("upstream is not configured")?;
    let scheme = upstream.scheme.as_deref().unwrap_or("https");
    let host = upstream
        .host
        .as_deref()
        .context("upstream.host must be configured")?;
    let timeout = upstream.timeout.unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);

    let url = format!("{}://{}/{}", scheme, host, path.trim_start_matches('/'));
    let uri: hyper::Uri = url.parse().with_context(|| format!("Invalid URL: {}", url))?;
    let method = Method::from_bytes(method.to_uppercase().as_bytes())
        .with_context(|| format!("Invalid method: {}", method))?;

    let meter = CallMeter::new(cfg.subsystem())?;
    let transport = MeteredTransport::new(HyperTransport::new(timeout), cfg.labeler(), meter);

    match transport.round_trip(OutboundRequest::new(method, uri)).await {
        Ok(response) => info!(
            component = "main",
            event = "call_done",
            status = response.status,
            body_len = response.body.len(),
            "call completed"
        ),
        Err(e) => error!(
            component = "main",
            event = "call_failed",
            error = %e,
            "call failed"
        ),
    }

    if let Some(text) = exporter::render() {
        print!("{text}");
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let cfg = load_cfg(args.cfg)?;

    // Configure logger (must be done after config is loaded)
    configure_logger(&cfg);

    info!(
        component = "config",
        event = "load_success",
        tree_nodes = cfg.labeler().tree().len(),
        labels = ?REQUEST_LABEL_NAMES,
        "config loaded"
    );

    if cfg.is_metrics_enabled() {
        let buckets = cfg
            .metrics()
            .and_then(|m| m.buckets.clone())
            .unwrap_or_else(|| DEFAULT_BUCKETS.to_vec());
        exporter::init_prometheus_exporter(&buckets)?;
    }

    match args.command {
        Command::Label {
            method,
            path,
            status,
        } => {
            print_labels(&method, &path, status, &cfg);
            Ok(())
        }
        Command::Call { method, path } => tokio::runtime::Runtime::new()
            .context("Failed to create tokio runtime")?
            .block_on(call(&cfg, &method, &path)),
    }
}
