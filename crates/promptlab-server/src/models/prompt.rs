//! Prompt - Text templates with tags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use promptlab::{CollectionFilter, NewPrompt, Prompt, PromptPatch, PromptQuery, SortOrder};

use crate::application::PromptTemplateInfo;

// ============================================
// Request/Response DTOs
// ============================================

/// Create Prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update Prompt request (PUT and PATCH); omitted fields keep their value
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query parameters for listing prompts
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPromptsQuery {
    /// Only prompts in this collection
    pub collection_id: Option<String>,
    /// Only prompts without a collection (takes precedence over collection_id)
    #[serde(default)]
    pub unassigned: bool,
    /// Case-insensitive substring over title and description
    pub search: Option<String>,
    /// Exact tag match
    pub tag: Option<String>,
    /// Sort by creation time: desc (default) or asc
    pub order: Option<String>,
}

/// Prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Prompt list response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptListResponse {
    pub prompts: Vec<PromptResponse>,
    pub total: usize,
}

/// Template variables found in a prompt's content
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptVariablesResponse {
    pub prompt_id: String,
    pub variables: Vec<String>,
    /// Whether the content passes the minimum-length check
    pub content_valid: bool,
}

impl From<CreatePromptRequest> for NewPrompt {
    fn from(req: CreatePromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            description: req.description,
            collection_id: req.collection_id,
            tags: req.tags,
        }
    }
}

impl From<UpdatePromptRequest> for PromptPatch {
    fn from(req: UpdatePromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            description: req.description,
            collection_id: req.collection_id,
            tags: req.tags,
        }
    }
}

impl ListPromptsQuery {
    /// Convert to the domain query; fails on an unknown sort order
    pub fn into_query(self) -> Result<PromptQuery, String> {
        let order: SortOrder = self
            .order
            .as_deref()
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or_default();

        let collection = if self.unassigned {
            Some(CollectionFilter::Unassigned)
        } else {
            self.collection_id
                .filter(|id| !id.is_empty())
                .map(CollectionFilter::Assigned)
        };

        Ok(PromptQuery {
            collection,
            search: self.search,
            tag: self.tag,
            order,
        })
    }
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            content: prompt.content,
            description: prompt.description,
            collection_id: prompt.collection_id,
            tags: prompt.tags,
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}

impl From<Vec<Prompt>> for PromptListResponse {
    fn from(prompts: Vec<Prompt>) -> Self {
        let prompts: Vec<PromptResponse> = prompts.into_iter().map(Into::into).collect();
        Self {
            total: prompts.len(),
            prompts,
        }
    }
}

impl From<PromptTemplateInfo> for PromptVariablesResponse {
    fn from(info: PromptTemplateInfo) -> Self {
        Self {
            prompt_id: info.prompt_id,
            variables: info.variables,
            content_valid: info.content_valid,
        }
    }
}
