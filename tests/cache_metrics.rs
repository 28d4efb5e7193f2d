use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use metrics_util::debugging::DebuggingRecorder;
use tokio::sync::Mutex;

use braid::application::payload::PayloadService;
use braid::application::repos::{
    PayloadRepo, RepoError, StoreOutcome, TransformCacheRepo,
};
use braid::application::transform::Uppercase;
use braid::domain::entities::{PayloadRecord, TransformRecord};

#[derive(Default)]
struct MemoryRepos {
    transforms: Mutex<HashMap<String, String>>,
    payloads: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl TransformCacheRepo for MemoryRepos {
    async fn find_output(&self, input: &str) -> Result<Option<String>, RepoError> {
        Ok(self.transforms.lock().await.get(input).cloned())
    }

    async fn insert_if_absent(
        &self,
        record: &TransformRecord,
    ) -> Result<StoreOutcome, RepoError> {
        let mut transforms = self.transforms.lock().await;
        if transforms.contains_key(&record.input) {
            Ok(StoreOutcome::AlreadyExists)
        } else {
            transforms.insert(record.input.clone(), record.output.clone());
            Ok(StoreOutcome::Inserted)
        }
    }

    async fn count_entries(&self) -> Result<u64, RepoError> {
        Ok(self.transforms.lock().await.len() as u64)
    }
}

#[async_trait]
impl PayloadRepo for MemoryRepos {
    async fn find_output(&self, id: &str) -> Result<Option<String>, RepoError> {
        Ok(self.payloads.lock().await.get(id).cloned())
    }

    async fn insert_if_absent(&self, record: &PayloadRecord) -> Result<StoreOutcome, RepoError> {
        let mut payloads = self.payloads.lock().await;
        if payloads.contains_key(&record.id) {
            Ok(StoreOutcome::AlreadyExists)
        } else {
            payloads.insert(record.id.clone(), record.output.clone());
            Ok(StoreOutcome::Inserted)
        }
    }

    async fn count_entries(&self) -> Result<u64, RepoError> {
        Ok(self.payloads.lock().await.len() as u64)
    }
}

#[tokio::test]
async fn cache_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let repos = Arc::new(MemoryRepos::default());
    let service = PayloadService::new(repos.clone(), repos, Arc::new(Uppercase), false);

    let lists = (vec!["a".to_string()], vec!["a".to_string()]);
    // First call: payload miss, one transform miss and one transform hit
    // (the repeated element). Second call: payload hit.
    service
        .create_payload(&lists.0, &lists.1)
        .await
        .expect("first create");
    service
        .create_payload(&lists.0, &lists.1)
        .await
        .expect("second create");

    let recorded: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(key, _, _, _)| key.key().name().to_string())
        .collect();

    for expected in [
        "braid_payload_cache_hit_total",
        "braid_payload_cache_miss_total",
        "braid_transform_cache_hit_total",
        "braid_transform_cache_miss_total",
    ] {
        assert!(recorded.contains(expected), "missing metric `{expected}`");
    }
}
