//! Collection - Named grouping bucket for prompts
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::errors::DomainError;
use crate::domain::identity::{current_time, generate_id};

/// Collection - A named group of prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Collection {
    pub id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a collection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCollection {
    pub name: String,
    pub description: Option<String>,
}

/// Field-wise update for a collection; `None` keeps the existing value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Collection {
    /// Create a new collection with generated ID and timestamp
    pub fn new(draft: NewCollection) -> Result<Self, DomainError> {
        let collection = Self {
            id: generate_id(),
            name: draft.name,
            description: draft.description,
            created_at: current_time(),
        };
        collection.validate()?;
        Ok(collection)
    }

    /// Merge a patch over this collection, keeping `id` and `created_at`
    pub fn merge(&self, patch: CollectionPatch) -> Result<Self, DomainError> {
        let merged = Self {
            id: self.id.clone(),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.or_else(|| self.description.clone()),
            created_at: self.created_at,
        };
        merged.validate()?;
        Ok(merged)
    }
}
