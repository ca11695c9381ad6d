//! Domain Services
//!
//! Stateless logic over domain entities.
//! - query: filter / search / sort pipeline for prompt listings
//! - template: placeholder extraction and content checks

pub mod query;
pub mod template;

pub use query::{
    filter_by_collection, filter_by_tag, search_prompts, sort_by_created, CollectionFilter,
    PromptQuery,
};
pub use template::{extract_variables, validate_prompt_content};
