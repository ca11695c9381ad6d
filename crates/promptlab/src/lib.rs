//! PromptLab Domain Library
//!
//! Core domain types and interfaces for the PromptLab prompt registry.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, Collection)
//!   - `value_objects/`: Immutable value types (Tag, SortOrder)
//!   - `services/`: Query pipeline and template content utilities
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: The `Store` owning prompts and collections
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::domain::{NewPrompt, Prompt, PromptQuery};
//! use promptlab::ports::Store;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    current_time, extract_variables, generate_id, normalize_tags, validate_prompt_content,
    Collection, CollectionFilter, CollectionPatch, DomainError, NewCollection, NewPrompt, Prompt,
    PromptPatch, PromptQuery, SortOrder, Tag,
};
pub use ports::Store;
