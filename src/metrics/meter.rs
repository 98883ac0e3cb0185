use std::time::Duration;

use crate::labels::RequestLabels;

// Metric name constants
pub const DEFAULT_SUBSYSTEM: &str = "api_outbound";
pub const REQUEST_COUNT_SUFFIX: &str = "_request_count";
pub const REQUEST_DURATION_SUFFIX: &str = "_request_duration";

/// Default buckets of the call duration histogram, in seconds.
pub const DEFAULT_BUCKETS: [f64; 4] = [0.1, 1.0, 10.0, 30.0];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeterError {
    #[error("invalid metrics subsystem {0:?}: must match [a-zA-Z_][a-zA-Z0-9_]*")]
    InvalidSubsystem(String),
}

/// Records the count and the duration of outbound API calls.
#[derive(Debug, Clone)]
pub struct CallMeter {
    count_name: String,
    duration_name: String,
}

impl CallMeter {
    /// Creates a meter whose metric names start with `subsystem`.
    pub fn new(subsystem: &str) -> Result<Self, MeterError> {
        if !is_valid_subsystem(subsystem) {
            return Err(MeterError::InvalidSubsystem(subsystem.to_string()));
        }

        let meter = Self {
            count_name: format!("{subsystem}{REQUEST_COUNT_SUFFIX}"),
            duration_name: format!("{subsystem}{REQUEST_DURATION_SUFFIX}"),
        };
        meter.describe();
        Ok(meter)
    }

    pub fn count_name(&self) -> &str {
        &self.count_name
    }

    pub fn duration_name(&self) -> &str {
        &self.duration_name
    }

    /// Registers HELP/TYPE for both metrics with the installed recorder.
    pub fn describe(&self) {
        metrics::describe_counter!(
            self.count_name.clone(),
            metrics::Unit::Count,
            "Number of API requests sent"
        );
        metrics::describe_histogram!(
            self.duration_name.clone(),
            metrics::Unit::Seconds,
            "API request duration in seconds"
        );
    }

    /// Records one call.
    pub fn record(&self, labels: &RequestLabels, elapsed: Duration) {
        let labels = labels.to_metric_labels();
        metrics::counter!(self.count_name.clone(), labels.clone()).increment(1);
        metrics::histogram!(self.duration_name.clone(), labels).record(elapsed.as_secs_f64());
    }
}

fn is_valid_subsystem(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
