//! Prometheus metrics of outbound API calls.
//
//! - `<subsystem>_request_count` (counter): calls by apiservice, code, method, path
//! - `<subsystem>_request_duration` (histogram): call duration in seconds, same labels

pub mod exporter;
pub mod meter;


// Re-export commonly used items
pub use meter::*;
