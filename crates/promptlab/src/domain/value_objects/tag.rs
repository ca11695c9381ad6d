//! Tag - Normalized free-form label on a prompt
//!
//! Tags are stored trimmed and lowercased so that "Python", " python " and
//! "PYTHON" are the same tag.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LENGTH: usize = 50;

/// A normalized, non-empty tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Normalize and validate a raw tag.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_tag(raw);
        if normalized.is_empty() {
            return Err(DomainError::Validation(
                "tag must not be empty or whitespace only".to_string(),
            ));
        }
        if normalized.chars().count() > MAX_TAG_LENGTH {
            return Err(DomainError::Validation(format!(
                "tag exceeds maximum length of {MAX_TAG_LENGTH} characters"
            )));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim and lowercase a single tag without validating it.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a tag list: trim + lowercase each entry, drop empty entries and
/// drop duplicates, keeping the first occurrence.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = normalize_tag(&tag);
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
