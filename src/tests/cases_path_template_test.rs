// Path template scenarios against the built-in route catalog.

use crate::labels::{path_label, CATCH_ALL};
use crate::tests::support::{labels_for, test_labeler};

/// Known routes with identifiers reduce to the same template.
#[test]
fn test_identifiers_collapse_to_one_template() {
    let labeler = test_labeler();
    let paths = [
        "/api/clusters_mgmt/v1/clusters/1jdk2mf0s8ki2f9tq5ck5su0lm2hn3v7",
        "/api/clusters_mgmt/v1/clusters/2b9c5d2e-9f4e-4c38-bc1a-2f5a1b3c4d5e",
        "/api/clusters_mgmt/v1/clusters/42/",
    ];
    for path in paths {
        assert_eq!(
            labels_for(&labeler, "GET", path, 200).path,
            "/api/clusters_mgmt/v1/clusters/-",
            "path {path}"
        );
    }
}

#[test]
fn test_collection_and_item_routes() {
    let labeler = test_labeler();
    assert_eq!(
        labels_for(&labeler, "GET", "/api/accounts_mgmt/v1/accounts", 200).path,
        "/api/accounts_mgmt/v1/accounts"
    );
    assert_eq!(
        labels_for(&labeler, "PATCH", "/api/accounts_mgmt/v1/accounts/1a2b", 200).path,
        "/api/accounts_mgmt/v1/accounts/-"
    );
    assert_eq!(
        labels_for(&labeler, "GET", "/api/accounts_mgmt/v1/current_account", 200).path,
        "/api/accounts_mgmt/v1/current_account"
    );
}

#[test]
fn test_nested_variables() {
    let labeler = test_labeler();
    assert_eq!(
        labels_for(
            &labeler,
            "DELETE",
            "/api/clusters_mgmt/v1/clusters/123/groups/dedicated-admins/users/alice",
            204
        )
        .path,
        "/api/clusters_mgmt/v1/clusters/-/groups/-/users/-"
    );
    assert_eq!(
        labels_for(
            &labeler,
            "GET",
            "/api/clusters_mgmt/v1/cloud_providers/aws/regions/us-east-1",
            200
        )
        .path,
        "/api/clusters_mgmt/v1/cloud_providers/-/regions/-"
    );
}

#[test]
fn test_unknown_shapes_fall_back_to_catch_all() {
    let labeler = test_labeler();
    for path in [
        "/healthz",
        "/api/clusters_mgmt/v2/clusters",
        "/api/clusters_mgmt/v1/clusters/123/unknown",
        "/api/clusters_mgmt/v1/clusters/123/status/extra/depth",
    ] {
        assert_eq!(labels_for(&labeler, "GET", path, 200).path, CATCH_ALL, "path {path}");
    }
}

/// The number of distinct templates stays bounded whatever the identifiers are.
#[test]
fn test_label_cardinality_is_bounded() {
    let labeler = test_labeler();
    let mut templates = std::collections::HashSet::new();
    for i in 0..1000 {
        templates.insert(path_label(
            labeler.tree(),
            &format!("/api/clusters_mgmt/v1/clusters/{i}/machine_pools/pool-{i}"),
        ));
        templates.insert(path_label(labeler.tree(), &format!("/random/{i}")));
    }
    assert_eq!(templates.len(), 2, "{templates:?}");
}

#[test]
fn test_full_label_set() {
    let labeler = test_labeler();

    let labels = labels_for(&labeler, "get", "/api/service_logs/v1/cluster_logs/abc", 200);
    assert_eq!(labels.service, "ocm-logs-service");
    assert_eq!(labels.method, "GET");
    assert_eq!(labels.code, "200");
    assert_eq!(labels.path, "/api/service_logs/v1/cluster_logs/-");

    let labels = labeler.labels("post", "/api/authorizations/v1/access_review", None);
    assert_eq!(labels.service, "ocm-authorizations-service");
    assert_eq!(labels.code, "0");
    assert_eq!(labels.path, "/api/authorizations/v1/access_review");
}
