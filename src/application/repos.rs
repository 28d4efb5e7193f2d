//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{PayloadRecord, TransformRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result of an idempotent conditional insert.
///
/// Callers must treat both variants as success: `AlreadyExists` means another
/// writer won the race for the same key, which is equivalent to having
/// written the row ourselves because stored values are pure functions of
/// their keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Inserted,
    AlreadyExists,
}

/// Per-item memoization of the transform function.
///
/// `find_output` distinguishes absent from error; `insert_if_absent` must be
/// atomic in the storage layer so concurrent writers for the same input
/// never surface a duplicate-key failure and never overwrite an existing
/// mapping.
#[async_trait]
pub trait TransformCacheRepo: Send + Sync {
    async fn find_output(&self, input: &str) -> Result<Option<String>, RepoError>;

    async fn insert_if_absent(&self, record: &TransformRecord)
    -> Result<StoreOutcome, RepoError>;

    /// Number of distinct cached inputs. Used by tests and diagnostics.
    async fn count_entries(&self) -> Result<u64, RepoError>;
}

/// Whole-request cache keyed by content digest.
#[async_trait]
pub trait PayloadRepo: Send + Sync {
    async fn find_output(&self, id: &str) -> Result<Option<String>, RepoError>;

    async fn insert_if_absent(&self, record: &PayloadRecord) -> Result<StoreOutcome, RepoError>;

    async fn count_entries(&self) -> Result<u64, RepoError>;
}
