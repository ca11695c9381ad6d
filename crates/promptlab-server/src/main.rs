use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

#[cfg(test)]
mod test_support;

use adapters::InMemoryStore;
use application::{CollectionService, PromptService};
use config::AppConfig;

/// Type aliases for application services with the concrete store
pub type AppPromptService = PromptService<InMemoryStore>;
pub type AppCollectionService = CollectionService<InMemoryStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub collection_service: Arc<AppCollectionService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire both services to one shared store
    pub fn new(store: Arc<InMemoryStore>, config: AppConfig) -> Self {
        Self {
            prompt_service: Arc::new(PromptService::new(store.clone())),
            collection_service: Arc::new(CollectionService::new(store)),
            config: Arc::new(config),
        }
    }
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    environment: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
        message: format!("{} is running", state.config.app_name),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.to_string(),
    })
}

/// Build the full router: docs, health check, API routes and middleware
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("PromptLab API initializing...");

    let config = AppConfig::from_secrets(&secrets)?;
    let cors = config.cors_layer()?;
    tracing::info!(
        "Loaded config: {} ({}), CORS origins: {}",
        config.app_name,
        config.environment,
        config.cors_origins.join(", ")
    );

    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store, config);

    let router = build_router(state, cors);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("PromptLab API ready");

    Ok(router.into())
}
