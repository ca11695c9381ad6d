//! Store Port
//!
//! The single authoritative owner of prompts and collections. All entity
//! mutations go through it.
//!
//! Absence is data: lookups return `Option`, deletes return `bool`, and no
//! operation fails because an id is unknown.
//!
//! Plain `create_prompt` and `update_prompt` store what they are given.
//! [`Store::create_prompt_checked`] and [`Store::modify_prompt`] verify the
//! prompt's `collection_id` inside the same exclusive section as the write,
//! so a concurrent [`Store::delete_collection`] can never leave a dangling
//! reference behind.

use crate::domain::{errors::DomainError, Collection, Prompt};

/// Storage interface for prompts and collections.
///
/// Every method must appear atomic to concurrent callers.
pub trait Store: Send + Sync {
    /// Store a prompt under its id, overwriting any previous entry
    fn create_prompt(&self, prompt: Prompt) -> Prompt;

    /// Store a new prompt if its `collection_id` (when set) names an existing
    /// collection. Fails with `InvalidReference` and writes nothing otherwise.
    fn create_prompt_checked(&self, prompt: Prompt) -> Result<Prompt, DomainError>;

    /// Find a prompt by id
    fn get_prompt(&self, id: &str) -> Option<Prompt>;

    /// All prompts in insertion order
    fn get_all_prompts(&self) -> Vec<Prompt>;

    /// Replace the prompt stored at `id`. Returns `None` without writing if
    /// `id` is unknown. No merging and no timestamp handling happens here.
    fn update_prompt(&self, id: &str, prompt: Prompt) -> Option<Prompt>;

    /// Read-modify-write one prompt under a single exclusive section.
    ///
    /// `Ok(None)` if `id` is unknown. If `f` fails nothing is written. A
    /// result that moves the prompt to a collection that does not exist is
    /// rejected with `InvalidReference`.
    fn modify_prompt<F>(&self, id: &str, f: F) -> Result<Option<Prompt>, DomainError>
    where
        F: FnOnce(&Prompt) -> Result<Prompt, DomainError>;

    /// Remove a prompt; returns whether anything was removed
    fn delete_prompt(&self, id: &str) -> bool;

    /// Store a collection under its id, overwriting any previous entry
    fn create_collection(&self, collection: Collection) -> Collection;

    /// Find a collection by id
    fn get_collection(&self, id: &str) -> Option<Collection>;

    /// All collections in insertion order
    fn get_all_collections(&self) -> Vec<Collection>;

    /// Replace the collection stored at `id`; `None` if unknown
    fn update_collection(&self, id: &str, collection: Collection) -> Option<Collection>;

    /// Read-modify-write one collection under a single exclusive section.
    ///
    /// `Ok(None)` if `id` is unknown. If `f` fails nothing is written.
    fn modify_collection<F>(&self, id: &str, f: F) -> Result<Option<Collection>, DomainError>
    where
        F: FnOnce(&Collection) -> Result<Collection, DomainError>;

    /// Remove a collection and orphan every prompt referencing it, as one
    /// atomic step. Returns whether the collection existed.
    fn delete_collection(&self, id: &str) -> bool;

    /// Empty both entity maps (test isolation / reset only)
    fn clear(&self);
}
