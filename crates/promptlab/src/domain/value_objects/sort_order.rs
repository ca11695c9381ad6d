//! SortOrder - Direction of the recency sort on prompt listings

use serde::{Deserialize, Serialize};

/// Ordering by `created_at`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Descending,
    /// Oldest first
    Ascending,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" | "descending" | "newest" => Ok(SortOrder::Descending),
            "asc" | "ascending" | "oldest" => Ok(SortOrder::Ascending),
            _ => Err(format!("Unknown sort order: {}. Valid: desc, asc", s)),
        }
    }
}
