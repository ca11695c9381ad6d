//! Collection Routes - Prompt grouping management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    CollectionListResponse, CollectionResponse, CreateCollectionRequest, UpdateCollectionRequest,
};
use crate::AppState;

/// List all collections
#[utoipa::path(
    get,
    path = "/collections",
    responses(
        (status = 200, description = "All collections", body = CollectionListResponse)
    ),
    tag = "Collection"
)]
pub async fn list_collections(State(state): State<AppState>) -> Json<CollectionListResponse> {
    Json(state.collection_service.list_all().into())
}

/// Create new collection
#[utoipa::path(
    post,
    path = "/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = CollectionResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "Collection"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> ApiResult<(StatusCode, Json<CollectionResponse>)> {
    let collection = state.collection_service.create(payload.into())?;
    Ok((StatusCode::CREATED, Json(collection.into())))
}

/// Get collection by ID
#[utoipa::path(
    get,
    path = "/collections/{id}",
    params(
        ("id" = String, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection found", body = CollectionResponse),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collection"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = state
        .collection_service
        .get_by_id(&id)
        .ok_or(ApiError::NotFound("Collection"))?;
    Ok(Json(collection.into()))
}

/// Update collection
#[utoipa::path(
    put,
    path = "/collections/{id}",
    params(
        ("id" = String, Path, description = "Collection ID")
    ),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Collection updated", body = CollectionResponse),
        (status = 404, description = "Collection not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Collection"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCollectionRequest>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = state
        .collection_service
        .update(&id, payload.into())?
        .ok_or(ApiError::NotFound("Collection"))?;
    Ok(Json(collection.into()))
}

/// Delete collection
///
/// Prompts in the collection are kept and become unassigned.
#[utoipa::path(
    delete,
    path = "/collections/{id}",
    params(
        ("id" = String, Path, description = "Collection ID")
    ),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collection"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.collection_service.delete(&id) {
        return Err(ApiError::NotFound("Collection"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/collections/:id",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
}
