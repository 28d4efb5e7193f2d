use serde::{Deserialize, Serialize};

/// Request body for `POST /payload`.
#[derive(Debug, Deserialize)]
pub struct PayloadRequest {
    pub list_1: Vec<String>,
    pub list_2: Vec<String>,
}

/// Response body for both payload endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct PayloadResponse {
    pub id: String,
    pub output: String,
}
