//! Tag - Tag management payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Add Tag request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTagRequest {
    pub tag: String,
}

/// All distinct tags, sorted
#[derive(Debug, Serialize, ToSchema)]
pub struct TagListResponse {
    pub tags: Vec<String>,
}
