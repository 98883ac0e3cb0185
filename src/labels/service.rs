//! API service label derivation.

use serde::{Deserialize, Serialize};

/// Prefix every recognized API path starts with.
pub const DEFAULT_API_ROOT: &str = "/api/";
/// Tag prepended to the family segment of paths no rule knows about.
pub const DEFAULT_NAMESPACE: &str = "ocm-";

/// Maps a path prefix to a fixed service label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceFamily {
    pub prefix: String,
    pub name: String,
}

impl ServiceFamily {
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }
}

/// Ordered prefix rules used to compute the `apiservice` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRules {
    api_root: String,
    namespace: String,
    families: Vec<ServiceFamily>,
}

impl Default for ServiceRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_API_ROOT,
            DEFAULT_NAMESPACE,
            vec![
                ServiceFamily::new("/api/accounts_mgmt", "ocm-accounts-service"),
                ServiceFamily::new("/api/clusters_mgmt", "ocm-clusters-service"),
                ServiceFamily::new("/api/authorizations", "ocm-authorizations-service"),
                ServiceFamily::new("/api/service_logs", "ocm-logs-service"),
            ],
        )
    }
}

impl ServiceRules {
    /// Creates a rule set. Families are checked in the given order.
    pub fn new(
        api_root: impl Into<String>,
        namespace: impl Into<String>,
        families: Vec<ServiceFamily>,
    ) -> Self {
        Self {
            api_root: api_root.into(),
            namespace: namespace.into(),
            families,
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn families(&self) -> &[ServiceFamily] {
        &self.families
    }

    /// Calculates the `apiservice` label for the given URL path.
    ///
    /// An empty string means the path isn't part of a known API surface.
    pub fn service_label(&self, path: &str) -> String {
        let Some(rest) = path.strip_prefix(self.api_root.as_str()) else {
            return String::new();
        };

        if let Some(family) = self
            .families
            .iter()
            .find(|family| path.starts_with(family.prefix.as_str()))
        {
            return family.name.clone();
        }

        // The family segment only counts when something follows it.
        let mut parts = rest.split('/');
        match (parts.next(), parts.next()) {
            (Some(family), Some(_)) if !family.is_empty() => {
                format!("{}{}", self.namespace, family)
            }
            _ => String::new(),
        }
    }
}
