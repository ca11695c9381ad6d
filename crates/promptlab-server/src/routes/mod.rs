//! PromptLab API Routes
//!
//! - /prompts - Prompt management, search and filtering
//! - /prompts/:id/tags - Tag editing on a prompt
//! - /tags - All tags in use
//! - /collections - Collection management

use axum::Router;

use crate::AppState;

pub mod collection;
pub mod prompt;
pub mod swagger;
pub mod tag;

/// All API routes
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(prompt::router())
        .merge(tag::router())
        .merge(collection::router())
}
