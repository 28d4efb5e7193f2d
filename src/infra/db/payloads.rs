use async_trait::async_trait;

use crate::application::repos::{PayloadRepo, RepoError, StoreOutcome};
use crate::domain::entities::PayloadRecord;

use super::{PostgresRepositories, map_sqlx_error};

#[async_trait]
impl PayloadRepo for PostgresRepositories {
    async fn find_output(&self, id: &str) -> Result<Option<String>, RepoError> {
        sqlx::query_scalar::<_, String>("SELECT output FROM payloads WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)
    }

    async fn insert_if_absent(&self, record: &PayloadRecord) -> Result<StoreOutcome, RepoError> {
        let result = sqlx::query(
            "INSERT INTO payloads (id, output) VALUES ($1, $2) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&record.id)
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
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payloads")
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        Self::convert_count(count)
    }
}
