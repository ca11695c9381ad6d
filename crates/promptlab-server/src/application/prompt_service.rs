//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for prompt management: referential checks
//! against collections, merge-based updates and tag editing.

use std::collections::BTreeSet;
use std::sync::Arc;

use promptlab::{
    extract_variables, validate_prompt_content, DomainError, NewPrompt, Prompt, PromptPatch,
    PromptQuery, Store, Tag,
};

/// Placeholder summary of a prompt's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplateInfo {
    pub prompt_id: String,
    pub variables: Vec<String>,
    pub content_valid: bool,
}

/// Application service for Prompt operations
pub struct PromptService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> PromptService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List prompts through the query pipeline
    pub fn list(&self, query: &PromptQuery) -> Vec<Prompt> {
        let prompts = query.apply(self.store.get_all_prompts());
        tracing::debug!(?query, matched = prompts.len(), "Listed prompts");
        prompts
    }

    /// Get a prompt by ID
    pub fn get_by_id(&self, id: &str) -> Option<Prompt> {
        self.store.get_prompt(id)
    }

    /// Create a new prompt, rejecting unknown collection references
    pub fn create(&self, draft: NewPrompt) -> Result<Prompt, DomainError> {
        let prompt = Prompt::new(draft)?;
        let saved = self
            .store
            .create_prompt_checked(prompt)
            .inspect_err(log_rejected_reference)?;

        tracing::info!("Created Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Update a prompt by merging `patch` over the stored value.
    ///
    /// Serves both full (PUT) and partial (PATCH) updates: any field the
    /// caller leaves out keeps its stored value. `Ok(None)` if the prompt
    /// does not exist. The collection reference is checked by the store in
    /// the same exclusive section as the write.
    pub fn update(&self, id: &str, patch: PromptPatch) -> Result<Option<Prompt>, DomainError> {
        let updated = self
            .store
            .modify_prompt(id, |current| current.merge(patch))
            .inspect_err(log_rejected_reference)?;
        if let Some(prompt) = &updated {
            tracing::info!("Updated Prompt: {} ({})", prompt.title, prompt.id);
        }
        Ok(updated)
    }

    /// Delete a prompt
    pub fn delete(&self, id: &str) -> bool {
        let deleted = self.store.delete_prompt(id);
        if deleted {
            tracing::info!("Deleted Prompt: {}", id);
        }
        deleted
    }

    /// Add a normalized tag; adding an existing tag is a no-op
    pub fn add_tag(&self, id: &str, raw_tag: &str) -> Result<Option<Prompt>, DomainError> {
        let tag = Tag::parse(raw_tag)?;
        self.store.modify_prompt(id, |current| {
            let mut next = current.clone();
            if next.add_tag(tag.clone()) {
                tracing::info!("Tagged Prompt {} with '{}'", next.id, tag);
            }
            Ok(next)
        })
    }

    /// Remove a tag. Fails with `NotFound` if the prompt does not carry it.
    pub fn remove_tag(&self, id: &str, raw_tag: &str) -> Result<Option<Prompt>, DomainError> {
        let tag = Tag::parse(raw_tag).map_err(|_| DomainError::not_found("Tag", raw_tag))?;
        self.store.modify_prompt(id, |current| {
            let mut next = current.clone();
            if !next.remove_tag(&tag) {
                return Err(DomainError::not_found("Tag", tag.as_str()));
            }
            tracing::info!("Removed tag '{}' from Prompt {}", tag, next.id);
            Ok(next)
        })
    }

    /// Every distinct tag across all prompts, sorted
    pub fn list_tags(&self) -> Vec<String> {
        self.store
            .get_all_prompts()
            .into_iter()
            .flat_map(|p| p.tags)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Template variables and advisory content check for a prompt
    pub fn template_info(&self, id: &str) -> Option<PromptTemplateInfo> {
        self.store.get_prompt(id).map(|prompt| PromptTemplateInfo {
            variables: extract_variables(&prompt.content),
            content_valid: validate_prompt_content(&prompt.content),
            prompt_id: prompt.id,
        })
    }
}

fn log_rejected_reference(err: &DomainError) {
    if let DomainError::InvalidReference { id, .. } = err {
        tracing::warn!("Rejected reference to unknown Collection {}", id);
    }
}
