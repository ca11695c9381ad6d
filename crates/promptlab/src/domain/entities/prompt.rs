//! Prompt - Text templates with tags
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::errors::DomainError;
use crate::domain::identity::{current_time, generate_id, touch_time};
use crate::domain::value_objects::{normalize_tags, Tag};

/// Prompt - A prompt template, optionally filed under a Collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Prompt {
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// Collection this prompt is filed under (None = unassigned)
    pub collection_id: Option<String>,
    /// Normalized tags in insertion order
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a prompt
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPrompt {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Field-wise update for a prompt; `None` keeps the existing value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Prompt {
    /// Create a new prompt with generated ID and timestamps.
    ///
    /// Fails with [`DomainError::Validation`] naming every out-of-range field.
    pub fn new(draft: NewPrompt) -> Result<Self, DomainError> {
        let now = current_time();
        let prompt = Self {
            id: generate_id(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: draft.collection_id,
            tags: normalize_tags(draft.tags),
            created_at: now,
            updated_at: now,
        };
        prompt.validate()?;
        Ok(prompt)
    }

    /// Merge a patch over this prompt.
    ///
    /// Missing fields fall back to the current value, `id` and `created_at`
    /// are carried over and `updated_at` is refreshed even when nothing
    /// visible changed. Tags are normalized only when the patch carries them.
    pub fn merge(&self, patch: PromptPatch) -> Result<Self, DomainError> {
        let merged = Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            description: patch.description.or_else(|| self.description.clone()),
            collection_id: patch.collection_id.or_else(|| self.collection_id.clone()),
            tags: match patch.tags {
                Some(tags) => normalize_tags(tags),
                None => self.tags.clone(),
            },
            created_at: self.created_at,
            updated_at: touch_time(self.updated_at),
        };
        merged.validate()?;
        Ok(merged)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag.as_str())
    }

    /// Append a tag; returns false (and leaves the prompt untouched) if present.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag.into());
        self.touch();
        true
    }

    /// Remove a tag; returns false if the prompt did not carry it.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag.as_str());
        if self.tags.len() == before {
            return false;
        }
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.updated_at = touch_time(self.updated_at);
    }
}
