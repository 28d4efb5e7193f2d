use std::sync::Arc;

use crate::application::payload::PayloadService;
use crate::infra::db::PostgresRepositories;

#[derive(Clone)]
pub struct ApiState {
    pub payloads: Arc<PayloadService>,
    pub db: Option<Arc<PostgresRepositories>>,
}

impl ApiState {
    pub fn new(payloads: Arc<PayloadService>, db: Arc<PostgresRepositories>) -> Self {
        Self {
            payloads,
            db: Some(db),
        }
    }

    /// State without a live database handle; the health endpoint reports
    /// unavailable. Used by tests running against in-memory repositories.
    pub fn without_db(payloads: Arc<PayloadService>) -> Self {
        Self { payloads, db: None }
    }
}
