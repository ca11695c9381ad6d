//! PromptLab API Models
//!
//! Request/response DTOs for the HTTP layer.
//! - Prompt: Text templates
//! - Collection: Prompt groupings
//! - Tag: Tag management

mod collection;
mod prompt;
mod tag;

pub use collection::*;
pub use prompt::*;
pub use tag::*;
