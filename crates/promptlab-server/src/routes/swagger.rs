//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::HealthCheck;

use crate::models::{
    AddTagRequest,
    CollectionListResponse,
    CollectionResponse,
    // Collection models
    CreateCollectionRequest,
    // Prompt models
    CreatePromptRequest,
    PromptListResponse,
    PromptResponse,
    PromptVariablesResponse,
    // Tag models
    TagListResponse,
    UpdateCollectionRequest,
    UpdatePromptRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::create_prompt,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::patch_prompt,
        super::prompt::delete_prompt,
        super::prompt::get_prompt_variables,
        // Tag endpoints
        super::tag::list_tags,
        super::tag::add_tag,
        super::tag::remove_tag,
        // Collection endpoints
        super::collection::list_collections,
        super::collection::create_collection,
        super::collection::get_collection,
        super::collection::update_collection,
        super::collection::delete_collection,
    ),
    info(
        title = "PromptLab API",
        version = "0.1.0",
        description = "Store, organize and search reusable prompt templates.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prompt", description = "Prompt - Text templates with {{variable}} placeholders"),
        (name = "Tag", description = "Tag - Free-form labels on prompts"),
        (name = "Collection", description = "Collection - Named groupings of prompts"),
    ),
    components(
        schemas(
            // Health
            HealthCheck,
            // Prompt
            CreatePromptRequest,
            UpdatePromptRequest,
            PromptResponse,
            PromptListResponse,
            PromptVariablesResponse,
            // Tag
            AddTagRequest,
            TagListResponse,
            // Collection
            CreateCollectionRequest,
            UpdateCollectionRequest,
            CollectionResponse,
            CollectionListResponse,
        )
    ),
)]
pub struct ApiDoc;
