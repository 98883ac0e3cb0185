// Concurrent label computation over one shared route tree.

use std::sync::Arc;
use std::thread;

use crate::labels::Labeler;
use crate::tests::support::test_labeler;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_labeler_is_send_and_sync() {
    assert_send_sync::<Labeler>();
}

/// Threads share the tree without locks and all get the same answers.
#[test]
fn test_concurrent_labels_from_threads() {
    let labeler = Arc::new(test_labeler());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let labeler = Arc::clone(&labeler);
            thread::spawn(move || {
                for i in 0..500 {
                    let path = format!("/api/clusters_mgmt/v1/clusters/{worker}-{i}/status");
                    let labels = labeler.labels("get", &path, Some(200));
                    assert_eq!(labels.path, "/api/clusters_mgmt/v1/clusters/-/status");
                    assert_eq!(labels.service, "ocm-clusters-service");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_labels_from_tasks() {
    let labeler = test_labeler();

    let mut handles = vec![];
    for i in 0..32 {
        let labeler = labeler.clone();
        handles.push(tokio::spawn(async move {
            labeler
                .labels("delete", &format!("/api/accounts_mgmt/v1/accounts/{i}"), None)
                .path
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "/api/accounts_mgmt/v1/accounts/-");
    }
}
