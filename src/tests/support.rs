// Shared helpers for scenario tests.

use crate::config::{new_test_config, ConfigTrait};
use crate::labels::{Labeler, RequestLabels};

/// Labeler built from the test configuration (built-in catalog, default services).
pub fn test_labeler() -> Labeler {
    new_test_config().labeler()
}

/// Shorthand for computing labels of a call that got a response.
pub fn labels_for(labeler: &Labeler, method: &str, path: &str, status: u16) -> RequestLabels {
    labeler.labels(method, path, Some(status))
}
