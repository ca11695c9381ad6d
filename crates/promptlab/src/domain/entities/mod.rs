//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: A titled, tagged text template
//! - Collection: A named grouping bucket for prompts

mod collection;
mod prompt;

pub use collection::*;
pub use prompt::*;
