//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use validator::ValidationErrors;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid reference: {entity_type} with id {id} does not exist")]
    InvalidReference { entity_type: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_reference<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::InvalidReference {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        Self::Validation(format!("invalid field(s): {}", fields.join(", ")))
    }
}
