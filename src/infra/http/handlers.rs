//! Payload endpoint handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::error::{ApiError, repo_error_to_api};
use super::models::{PayloadRequest, PayloadResponse};
use super::state::ApiState;

pub async fn create_payload(
    State(state): State<ApiState>,
    Json(payload): Json<PayloadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .payloads
        .create_payload(&payload.list_1, &payload.list_2)
        .await
        .map_err(repo_error_to_api)?;

    // Read the stored record back rather than echoing the in-memory value,
    // so the response reflects exactly what the cache now holds.
    let record = state
        .payloads
        .get_payload(&created.id)
        .await
        .map_err(repo_error_to_api)?
        .ok_or_else(|| {
            ApiError::internal(
                "Failed to cache or retrieve payload",
                Some(format!("payload {} missing after creation", created.id)),
            )
        })?;

    let status = if created.freshly_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(PayloadResponse {
            id: record.id,
            output: record.output,
        }),
    ))
}

pub async fn get_payload(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .payloads
        .get_payload(&id)
        .await
        .map_err(repo_error_to_api)?;

    match record {
        Some(record) => Ok(Json(PayloadResponse {
            id: record.id,
            output: record.output,
        })),
        None => Err(ApiError::not_found("payload not found")),
    }
}
