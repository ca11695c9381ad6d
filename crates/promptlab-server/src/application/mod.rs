//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the store and the HTTP layer.

mod collection_service;
mod prompt_service;

pub use collection_service::CollectionService;
pub use prompt_service::{PromptService, PromptTemplateInfo};
