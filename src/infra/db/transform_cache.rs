use async_trait::async_trait;

use crate::application::repos::{RepoError, StoreOutcome, TransformCacheRepo};
use crate::domain::entities::TransformRecord;

use super::{PostgresRepositories, map_sqlx_error};

#[async_trait]
impl TransformCacheRepo for PostgresRepositories {
    async fn find_output(&self, input: &str) -> Result<Option<String>, RepoError> {
        sqlx::query_scalar::<_, String>("SELECT output FROM transform_cache WHERE input = $1")
            .bind(input)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)
    }

    async fn insert_if_absent(
        &self,
        record: &TransformRecord,
    ) -> Result<StoreOutcome, RepoError> {
        // ON CONFLICT DO NOTHING makes the idempotent-store contract atomic:
        // a concurrent writer for the same input never surfaces a
        // duplicate-key error, and the existing row is never overwritten.
        let result = sqlx::query(
            "INSERT INTO transform_cache (input, output) VALUES ($1, $2) \
             ON CONFLICT (input) DO NOTHING",
        )
        .bind(&record.input)
        .bind(&record.output)
        .execute(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            Ok(StoreOutcome::AlreadyExists)
        } else {
            Ok(StoreOutcome::Inserted)
        }
    }

    async fn count_entries(&self) -> Result<u64, RepoError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transform_cache")
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        Self::convert_count(count)
    }
}
