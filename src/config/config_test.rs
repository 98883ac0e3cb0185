#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::{new_test_config, Config, ConfigTrait};
    use crate::labels::CATCH_ALL;

    const FULL_YAML: &str = r#"
apimetrics:
  env: prod
  logs:
    level: info
  metrics:
    enabled: true
    subsystem: ocm_sdk
    buckets: [0.05, 0.5, 5]
  labels:
    api_root: /api/
    namespace: ocm-
    services:
      - prefix: /api/clusters_mgmt
        name: clusters
  paths:
    - /api/clusters_mgmt/v1/clusters/-
    - /api/clusters_mgmt/v1/versions
  upstream:
    scheme: https
    host: api.example.com
    timeout: 3s
"#;

    #[test]
    fn test_parse_full_config() {
        let cfg = Config::from_yaml(FULL_YAML).expect("valid config");

        assert!(cfg.is_prod());
        assert!(cfg.is_metrics_enabled());
        assert_eq!(cfg.subsystem(), "ocm_sdk");
        assert_eq!(
            cfg.metrics().and_then(|m| m.buckets.clone()),
            Some(vec![0.05, 0.5, 5.0])
        );
        assert_eq!(
            cfg.upstream().and_then(|u| u.timeout),
            Some(Duration::from_secs(3))
        );

        let labeler = cfg.labeler();
        let labels = labeler.labels("get", "/api/clusters_mgmt/v1/clusters/42", Some(200));
        assert_eq!(labels.service, "clusters");
        assert_eq!(labels.path, "/api/clusters_mgmt/v1/clusters/-");

        // Only the configured routes are known.
        let labels = labeler.labels("get", "/api/clusters_mgmt/v1/clusters/42/status", None);
        assert_eq!(labels.path, CATCH_ALL);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = Config::from_yaml("apimetrics:\n  env: dev\n").expect("valid config");

        assert!(cfg.is_dev());
        assert!(!cfg.is_metrics_enabled());
        assert_eq!(cfg.subsystem(), "api_outbound");
        assert!(cfg.upstream().is_none());

        let labels = cfg
            .labeler()
            .labels("get", "/api/accounts_mgmt/v1/accounts/abc", Some(404));
        assert_eq!(labels.service, "ocm-accounts-service");
        assert_eq!(labels.path, "/api/accounts_mgmt/v1/accounts/-");
        assert_eq!(labels.code, "404");
    }

    #[test]
    fn test_invalid_route_is_rejected() {
        let yaml = "apimetrics:\n  env: dev\n  paths:\n    - /api//clusters\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(format!("{err:#}").contains("empty segment"));
    }

    #[test]
    fn test_upstream_without_host_is_rejected() {
        let yaml = "apimetrics:\n  env: dev\n  upstream:\n    scheme: http\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Config::load("does/not/exist.yaml").is_err());
    }

    #[test]
    fn test_new_test_config() {
        let cfg = new_test_config();
        assert!(cfg.is_test());
        assert!(!cfg.labeler().tree().is_empty());
    }
}
