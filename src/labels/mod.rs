//! Labels attached to outbound API call metrics.
//!
//! Every observation carries four labels, always in this order:
//! - `apiservice`: API family of the request (`ocm-clusters-service`, ...)
//! - `code`: response status code, `0` when no response was received
//! - `method`: uppercased HTTP method
//! - `path`: path template with variable segments replaced by `-`
//!
//! The label names and their order define metric identity downstream, so they
//! must not change.

pub mod catalog;
pub mod code;
pub mod method;
pub mod path;
pub mod service;
pub mod tree;


pub use code::{code_label, status_label};
pub use method::method_label;
pub use path::{normalize, path_label, CATCH_ALL};
pub use service::{ServiceFamily, ServiceRules};
pub use tree::{CatalogError, PathTree, WILDCARD};

use std::sync::Arc;

pub const SERVICE_LABEL_NAME: &str = "apiservice";
pub const CODE_LABEL_NAME: &str = "code";
pub const METHOD_LABEL_NAME: &str = "method";
pub const PATH_LABEL_NAME: &str = "path";

/// Names of the labels added to call metrics, in declaration order.
pub const REQUEST_LABEL_NAMES: [&str; 4] = [
    SERVICE_LABEL_NAME,
    CODE_LABEL_NAME,
    METHOD_LABEL_NAME,
    PATH_LABEL_NAME,
];

/// Label values computed for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLabels {
    pub service: String,
    pub code: String,
    pub method: String,
    pub path: String,
}

impl RequestLabels {
    /// Returns name/value pairs in the order of [`REQUEST_LABEL_NAMES`].
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (SERVICE_LABEL_NAME, self.service.as_str()),
            (CODE_LABEL_NAME, self.code.as_str()),
            (METHOD_LABEL_NAME, self.method.as_str()),
            (PATH_LABEL_NAME, self.path.as_str()),
        ]
    }

    /// Converts the values into labels for the `metrics` facade.
    pub fn to_metric_labels(&self) -> Vec<metrics::Label> {
        self.pairs()
            .iter()
            .map(|(name, value)| metrics::Label::new(*name, value.to_string()))
            .collect()
    }
}

/// Computes [`RequestLabels`] from a shared route tree and service rules.
///
/// Cloning only bumps reference counts, the tree itself is never copied.
#[derive(Debug, Clone)]
pub struct Labeler {
    tree: Arc<PathTree>,
    services: Arc<ServiceRules>,
}

impl Labeler {
    pub fn new(tree: Arc<PathTree>, services: Arc<ServiceRules>) -> Self {
        Self { tree, services }
    }

    pub fn tree(&self) -> &PathTree {
        &self.tree
    }

    pub fn services(&self) -> &ServiceRules {
        &self.services
    }

    /// Computes the labels of a call. `status` is `None` when no response arrived.
    pub fn labels(&self, method: &str, path: &str, status: Option<u16>) -> RequestLabels {
        RequestLabels {
            service: self.services.service_label(path),
            code: status_label(status),
            method: method_label(method),
            path: path_label(&self.tree, path),
        }
    }
}
