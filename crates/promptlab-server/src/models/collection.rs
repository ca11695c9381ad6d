//! Collection - Prompt groupings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptlab::{Collection, CollectionPatch, NewCollection};

/// Create Collection request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Update Collection request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Collection response
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Collection list response
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionResponse>,
    pub total: usize,
}

impl From<CreateCollectionRequest> for NewCollection {
    fn from(req: CreateCollectionRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

impl From<UpdateCollectionRequest> for CollectionPatch {
    fn from(req: UpdateCollectionRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            description: collection.description,
            created_at: collection.created_at,
        }
    }
}

impl From<Vec<Collection>> for CollectionListResponse {
    fn from(collections: Vec<Collection>) -> Self {
        let collections: Vec<CollectionResponse> =
            collections.into_iter().map(Into::into).collect();
        Self {
            total: collections.len(),
            collections,
        }
    }
}
