//! Built-in route catalog.
//!
//! Used when the configuration doesn't list its own `paths`. Variable segments
//! are written as `-`.

use super::tree::{CatalogError, PathTree};

pub const DEFAULT_ROUTES: &[&str] = &[
    "/api/accounts_mgmt/v1/access_token",
    "/api/accounts_mgmt/v1/accounts",
    "/api/accounts_mgmt/v1/accounts/-",
    "/api/accounts_mgmt/v1/accounts/-/labels",
    "/api/accounts_mgmt/v1/accounts/-/labels/-",
    "/api/accounts_mgmt/v1/cluster_authorizations",
    "/api/accounts_mgmt/v1/cluster_registrations",
    "/api/accounts_mgmt/v1/current_account",
    "/api/accounts_mgmt/v1/organizations",
    "/api/accounts_mgmt/v1/organizations/-",
    "/api/accounts_mgmt/v1/organizations/-/quota_cost",
    "/api/accounts_mgmt/v1/organizations/-/resource_quota",
    "/api/accounts_mgmt/v1/organizations/-/resource_quota/-",
    "/api/accounts_mgmt/v1/subscriptions",
    "/api/accounts_mgmt/v1/subscriptions/-",
    "/api/accounts_mgmt/v1/subscriptions/-/reserved_resources",
    "/api/authorizations/v1/access_review",
    "/api/authorizations/v1/capability_review",
    "/api/authorizations/v1/self_access_review",
    "/api/clusters_mgmt/v1/addons",
    "/api/clusters_mgmt/v1/addons/-",
    "/api/clusters_mgmt/v1/cloud_providers",
    "/api/clusters_mgmt/v1/cloud_providers/-",
    "/api/clusters_mgmt/v1/cloud_providers/-/regions",
    "/api/clusters_mgmt/v1/cloud_providers/-/regions/-",
    "/api/clusters_mgmt/v1/clusters",
    "/api/clusters_mgmt/v1/clusters/-",
    "/api/clusters_mgmt/v1/clusters/-/addons",
    "/api/clusters_mgmt/v1/clusters/-/addons/-",
    "/api/clusters_mgmt/v1/clusters/-/credentials",
    "/api/clusters_mgmt/v1/clusters/-/groups",
    "/api/clusters_mgmt/v1/clusters/-/groups/-/users",
    "/api/clusters_mgmt/v1/clusters/-/groups/-/users/-",
    "/api/clusters_mgmt/v1/clusters/-/identity_providers",
    "/api/clusters_mgmt/v1/clusters/-/identity_providers/-",
    "/api/clusters_mgmt/v1/clusters/-/ingresses",
    "/api/clusters_mgmt/v1/clusters/-/ingresses/-",
    "/api/clusters_mgmt/v1/clusters/-/logs",
    "/api/clusters_mgmt/v1/clusters/-/logs/-",
    "/api/clusters_mgmt/v1/clusters/-/machine_pools",
    "/api/clusters_mgmt/v1/clusters/-/machine_pools/-",
    "/api/clusters_mgmt/v1/clusters/-/metric_queries/cpu_total_by_node_roles_os",
    "/api/clusters_mgmt/v1/clusters/-/metric_queries/socket_total_by_node_roles_os",
    "/api/clusters_mgmt/v1/clusters/-/status",
    "/api/clusters_mgmt/v1/clusters/-/upgrade_policies",
    "/api/clusters_mgmt/v1/clusters/-/upgrade_policies/-",
    "/api/clusters_mgmt/v1/flavours",
    "/api/clusters_mgmt/v1/flavours/-",
    "/api/clusters_mgmt/v1/machine_types",
    "/api/clusters_mgmt/v1/versions",
    "/api/clusters_mgmt/v1/versions/-",
    "/api/service_logs/v1/cluster_logs",
    "/api/service_logs/v1/cluster_logs/-",
    "/api/service_logs/v1/clusters/-/cluster_logs",
];

/// Builds the tree for [`DEFAULT_ROUTES`].
pub fn default_tree() -> Result<PathTree, CatalogError> {
    PathTree::from_routes(DEFAULT_ROUTES)
}
