//! Tag Routes - Tag editing on prompts and tag listing

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::models::{AddTagRequest, PromptResponse, TagListResponse};
use crate::AppState;

/// List all tags in use
#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "Distinct tags, sorted", body = TagListResponse)
    ),
    tag = "Tag"
)]
pub async fn list_tags(State(state): State<AppState>) -> Json<TagListResponse> {
    Json(TagListResponse {
        tags: state.prompt_service.list_tags(),
    })
}

/// Add tag to prompt
///
/// Tags are trimmed and lowercased; adding a tag the prompt already has is a no-op.
#[utoipa::path(
    post,
    path = "/prompts/{id}/tags",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = AddTagRequest,
    responses(
        (status = 200, description = "Prompt with tag", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Invalid tag")
    ),
    tag = "Tag"
)]
pub async fn add_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddTagRequest>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state
        .prompt_service
        .add_tag(&id, &payload.tag)?
        .ok_or(ApiError::NotFound("Prompt"))?;
    Ok(Json(prompt.into()))
}

/// Remove tag from prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}/tags/{tag}",
    params(
        ("id" = String, Path, description = "Prompt ID"),
        ("tag" = String, Path, description = "Tag to remove")
    ),
    responses(
        (status = 204, description = "Tag removed"),
        (status = 404, description = "Prompt or tag not found")
    ),
    tag = "Tag"
)]
pub async fn remove_tag(
    State(state): State<AppState>,
    Path((id, tag)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state
        .prompt_service
        .remove_tag(&id, &tag)?
        .ok_or(ApiError::NotFound("Prompt"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(list_tags))
        .route("/prompts/:id/tags", post(add_tag))
        .route("/prompts/:id/tags/:tag", delete(remove_tag))
}
