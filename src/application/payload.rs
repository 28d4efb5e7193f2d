//! Payload orchestration: content addressing, memoized transforms,
//! interleaving, and the two-level cache.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, warn};

use crate::application::digest::payload_id;
use crate::application::interleave::interleave;
use crate::application::repos::{PayloadRepo, RepoError, StoreOutcome, TransformCacheRepo};
use crate::application::transform::Transformer;
use crate::domain::entities::{PayloadRecord, TransformRecord};

/// Outcome of `create_payload`, distinguishing a fresh computation from a
/// whole-request cache hit so the HTTP layer can answer 201 vs 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPayload {
    pub id: String,
    pub freshly_created: bool,
}

/// Composes the transform cache, the transformer, the interleaver, and the
/// payload cache.
///
/// The service holds no locks and keeps no in-process state about cache
/// contents: correctness under concurrent invocations rests entirely on the
/// repositories' atomic insert-if-absent semantics. A retried or concurrent
/// call with the same inputs converges on the same id and output.
pub struct PayloadService {
    transform_cache: Arc<dyn TransformCacheRepo>,
    payloads: Arc<dyn PayloadRepo>,
    transformer: Arc<dyn Transformer>,
    degraded_fallback: bool,
}

impl PayloadService {
    pub fn new(
        transform_cache: Arc<dyn TransformCacheRepo>,
        payloads: Arc<dyn PayloadRepo>,
        transformer: Arc<dyn Transformer>,
        degraded_fallback: bool,
    ) -> Self {
        Self {
            transform_cache,
            payloads,
            transformer,
            degraded_fallback,
        }
    }

    /// Produce (or re-use) the payload for a pair of input lists and return
    /// its content-addressed id.
    ///
    /// On a payload-cache hit the stored output is trusted as-is; nothing is
    /// recomputed or verified. On a miss every element of both lists runs
    /// through the memoized transform in original order, the results are
    /// interleaved, and the payload is stored idempotently. Losing the store
    /// race to a concurrent identical request is treated as success.
    pub async fn create_payload(
        &self,
        list_1: &[String],
        list_2: &[String],
    ) -> Result<CreatedPayload, RepoError> {
        let id = payload_id(list_1, list_2);

        if self.payloads.find_output(&id).await?.is_some() {
            counter!("braid_payload_cache_hit_total").increment(1);
            debug!(target = "braid::payload", id = %id, "payload cache hit");
            return Ok(CreatedPayload {
                id,
                freshly_created: false,
            });
        }
        counter!("braid_payload_cache_miss_total").increment(1);

        let mut transformed_1 = Vec::with_capacity(list_1.len());
        for item in list_1 {
            transformed_1.push(self.get_or_compute(item).await?);
        }
        let mut transformed_2 = Vec::with_capacity(list_2.len());
        for item in list_2 {
            transformed_2.push(self.get_or_compute(item).await?);
        }

        let record = PayloadRecord {
            id: id.clone(),
            output: interleave(&transformed_1, &transformed_2),
        };

        let outcome = self.payloads.insert_if_absent(&record).await?;
        if outcome == StoreOutcome::AlreadyExists {
            debug!(target = "braid::payload", id = %id, "lost payload store race to concurrent writer");
        }

        Ok(CreatedPayload {
            id,
            freshly_created: outcome == StoreOutcome::Inserted,
        })
    }

    /// Look up a previously produced payload. Absent is not an error.
    pub async fn get_payload(&self, id: &str) -> Result<Option<PayloadRecord>, RepoError> {
        let output = self.payloads.find_output(id).await?;
        Ok(output.map(|output| PayloadRecord {
            id: id.to_string(),
            output,
        }))
    }

    /// Memoized transform of a single item.
    ///
    /// Storage failures abort the request unless degraded fallback is
    /// configured, in which case the transform result is returned uncached
    /// and the failure is logged.
    async fn get_or_compute(&self, input: &str) -> Result<String, RepoError> {
        let cached = match self.transform_cache.find_output(input).await {
            Ok(cached) => cached,
            Err(err) => return self.degrade_or_fail(input, err),
        };

        if let Some(output) = cached {
            counter!("braid_transform_cache_hit_total").increment(1);
            return Ok(output);
        }
        counter!("braid_transform_cache_miss_total").increment(1);

        let record = TransformRecord {
            input: input.to_string(),
            output: self.transformer.transform(input),
        };
        match self.transform_cache.insert_if_absent(&record).await {
            // AlreadyExists means a concurrent writer stored the same pure
            // function of the same input; our computed value is identical.
            Ok(_) => Ok(record.output),
            Err(err) if self.degraded_fallback => {
                warn!(
                    target = "braid::payload",
                    error = %err,
                    "transform cache write failed, serving uncached result (degraded fallback)"
                );
                Ok(record.output)
            }
            Err(err) => Err(err),
        }
    }

    fn degrade_or_fail(&self, input: &str, err: RepoError) -> Result<String, RepoError> {
        if self.degraded_fallback {
            warn!(
                target = "braid::payload",
                error = %err,
                "transform cache read failed, recomputing without cache (degraded fallback)"
            );
            Ok(self.transformer.transform(input))
        } else {
            Err(err)
        }
    }
}
