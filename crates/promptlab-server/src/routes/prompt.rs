//! Prompt Routes - Prompt CRUD, search and filtering
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    CreatePromptRequest, ListPromptsQuery, PromptListResponse, PromptResponse,
    PromptVariablesResponse, UpdatePromptRequest,
};
use crate::AppState;

/// List prompts
///
/// GET /prompts?collection_id=...&search=...&tag=...&order=desc
#[utoipa::path(
    get,
    path = "/prompts",
    params(ListPromptsQuery),
    responses(
        (status = 200, description = "Matching prompts, newest first by default", body = PromptListResponse),
        (status = 400, description = "Invalid query parameter")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> ApiResult<Json<PromptListResponse>> {
    let query = query.into_query().map_err(ApiError::BadRequest)?;
    Ok(Json(state.prompt_service.list(&query).into()))
}

/// Create new prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> ApiResult<(StatusCode, Json<PromptResponse>)> {
    let prompt = state.prompt_service.create(payload.into())?;
    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Get prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state
        .prompt_service
        .get_by_id(&id)
        .ok_or(ApiError::NotFound("Prompt"))?;
    Ok(Json(prompt.into()))
}

/// Replace prompt
///
/// Omitted fields keep their stored value, same as PATCH.
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    apply_update(&state, &id, payload)
}

/// Partially update prompt
#[utoipa::path(
    patch,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Prompt"
)]
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    apply_update(&state, &id, payload)
}

fn apply_update(
    state: &AppState,
    id: &str,
    payload: UpdatePromptRequest,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state
        .prompt_service
        .update(id, payload.into())?
        .ok_or(ApiError::NotFound("Prompt"))?;
    Ok(Json(prompt.into()))
}

/// Delete prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 204, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.prompt_service.delete(&id) {
        return Err(ApiError::NotFound("Prompt"));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Template variables of a prompt
#[utoipa::path(
    get,
    path = "/prompts/{id}/variables",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Placeholders in the prompt content", body = PromptVariablesResponse),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt_variables(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PromptVariablesResponse>> {
    let info = state
        .prompt_service
        .template_info(&id)
        .ok_or(ApiError::NotFound("Prompt"))?;
    Ok(Json(info.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt)
                .put(update_prompt)
                .patch(patch_prompt)
                .delete(delete_prompt),
        )
        .route("/prompts/:id/variables", get(get_prompt_variables))
}
