//! Prompt Query Pipeline
//!
//! Filters, searches and sorts an in-memory set of prompts. Every call is a
//! linear scan over the full set; there is no index.

use crate::domain::entities::Prompt;
use crate::domain::value_objects::{normalize_tag, SortOrder};

/// Collection restriction for a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionFilter {
    /// Only prompts filed under this collection id
    Assigned(String),
    /// Only prompts with no collection
    Unassigned,
}

impl CollectionFilter {
    fn collection_id(&self) -> Option<&str> {
        match self {
            Self::Assigned(id) => Some(id.as_str()),
            Self::Unassigned => None,
        }
    }
}

/// Composite listing request, applied as collection -> search -> tag -> sort
#[derive(Debug, Clone, Default)]
pub struct PromptQuery {
    pub collection: Option<CollectionFilter>,
    /// Case-insensitive substring over title and description
    pub search: Option<String>,
    /// Exact (normalized) tag membership
    pub tag: Option<String>,
    pub order: SortOrder,
}

impl PromptQuery {
    /// Run the pipeline over `prompts`. Empty search/tag strings are ignored.
    pub fn apply(&self, prompts: Vec<Prompt>) -> Vec<Prompt> {
        let mut prompts = prompts;

        if let Some(filter) = &self.collection {
            prompts = filter_by_collection(prompts, filter.collection_id());
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            prompts = search_prompts(prompts, search);
        }

        if let Some(tag) = self.tag.as_deref().filter(|t| !t.trim().is_empty()) {
            prompts = filter_by_tag(prompts, tag);
        }

        sort_by_created(prompts, self.order)
    }
}

/// Keep prompts whose `collection_id` equals `collection_id` exactly
/// (`None` keeps unassigned prompts).
pub fn filter_by_collection(prompts: Vec<Prompt>, collection_id: Option<&str>) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| p.collection_id.as_deref() == collection_id)
        .collect()
}

/// Keep prompts whose title or description contains `query`, ignoring case.
pub fn search_prompts(prompts: Vec<Prompt>, query: &str) -> Vec<Prompt> {
    let needle = query.to_lowercase();
    prompts
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keep prompts carrying `tag` after normalization; no substring matching.
pub fn filter_by_tag(prompts: Vec<Prompt>, tag: &str) -> Vec<Prompt> {
    let tag = normalize_tag(tag);
    prompts
        .into_iter()
        .filter(|p| p.tags.iter().any(|t| *t == tag))
        .collect()
}

/// Stable sort by `created_at`.
pub fn sort_by_created(mut prompts: Vec<Prompt>, order: SortOrder) -> Vec<Prompt> {
    match order {
        SortOrder::Descending => prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Ascending => prompts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    prompts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::generate_id;
    use chrono::{DateTime, Duration, Utc};

    fn prompt(title: &str, created_at: DateTime<Utc>) -> Prompt {
        Prompt {
            id: generate_id(),
            title: title.to_string(),
            content: "Content".to_string(),
            description: None,
            collection_id: None,
            tags: vec![],
            created_at,
            updated_at: created_at,
        }
    }

    fn titled(title: &str) -> Prompt {
        prompt(title, Utc::now())
    }

    fn titles(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_sort_newest_first_by_default() {
        let t = Utc::now();
        let prompts = vec![
            prompt("First", t),
            prompt("Second", t + Duration::seconds(1)),
            prompt("Third", t + Duration::seconds(2)),
        ];
        let sorted = PromptQuery::default().apply(prompts);
        assert_eq!(titles(&sorted), vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_sort_ascending() {
        let t = Utc::now();
        let prompts = vec![prompt("New", t), prompt("Old", t - Duration::days(2))];
        let sorted = sort_by_created(prompts, SortOrder::Ascending);
        assert_eq!(titles(&sorted), vec!["Old", "New"]);
    }

    #[test]
    fn test_sort_uses_created_not_updated() {
        let t = Utc::now();
        let mut old = prompt("Old but edited", t - Duration::days(1));
        old.updated_at = t + Duration::days(1);
        let sorted = sort_by_created(vec![old, prompt("Fresh", t)], SortOrder::Descending);
        assert_eq!(titles(&sorted), vec!["Fresh", "Old but edited"]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_by_created(vec![], SortOrder::Descending).is_empty());
    }

    #[test]
    fn test_filter_by_collection() {
        let mut a = titled("A");
        a.collection_id = Some("C1".into());
        let mut b = titled("B");
        b.collection_id = Some("C1".into());
        let c = titled("C");
        let prompts = vec![a, b, c];

        let in_c1 = filter_by_collection(prompts.clone(), Some("C1"));
        assert_eq!(in_c1.len(), 2);

        let unassigned = filter_by_collection(prompts.clone(), None);
        assert_eq!(titles(&unassigned), vec!["C"]);

        assert!(filter_by_collection(prompts, Some("C9")).is_empty());
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let prompts = vec![
            titled("Email Template"),
            titled("SMS Template"),
            titled("Code Review"),
        ];
        for query in ["email", "EMAIL", "EmAiL"] {
            let found = search_prompts(prompts.clone(), query);
            assert_eq!(titles(&found), vec!["Email Template"]);
        }
        assert_eq!(search_prompts(prompts, "temp").len(), 2);
    }

    #[test]
    fn test_search_description() {
        let mut a = titled("T1");
        a.description = Some("For email campaigns".into());
        let mut b = titled("T2");
        b.description = Some("For SMS messaging".into());
        let c = titled("T3");

        let found = search_prompts(vec![a, b, c], "email");
        assert_eq!(titles(&found), vec!["T1"]);
    }

    #[test]
    fn test_search_does_not_look_at_content() {
        let mut p = titled("Greeting");
        p.content = "email body".into();
        assert!(search_prompts(vec![p], "email").is_empty());
    }

    #[test]
    fn test_filter_by_tag_exact() {
        let mut a = titled("A");
        a.tags = vec!["python".into()];
        let mut b = titled("B");
        b.tags = vec!["pythonic".into()];

        let found = filter_by_tag(vec![a, b], " Python ");
        assert_eq!(titles(&found), vec!["A"]);
    }

    #[test]
    fn test_pipeline_combines_filters() {
        let t = Utc::now();
        let mut a = prompt("Python Tutorial", t);
        a.collection_id = Some("C1".into());
        a.tags = vec!["beginner".into()];
        let mut b = prompt("Python Advanced", t + Duration::seconds(1));
        b.collection_id = Some("C1".into());
        let mut c = prompt("JavaScript Tutorial", t + Duration::seconds(2));
        c.collection_id = Some("C1".into());
        c.tags = vec!["beginner".into()];
        let d = prompt("Python Tutorial", t + Duration::seconds(3));

        let query = PromptQuery {
            collection: Some(CollectionFilter::Assigned("C1".into())),
            search: Some("python".into()),
            tag: None,
            order: SortOrder::Descending,
        };
        let found = query.apply(vec![a.clone(), b.clone(), c.clone(), d.clone()]);
        assert_eq!(titles(&found), vec!["Python Advanced", "Python Tutorial"]);

        let query = PromptQuery {
            tag: Some("beginner".into()),
            ..query
        };
        let found = query.apply(vec![a, b, c, d]);
        assert_eq!(titles(&found), vec!["Python Tutorial"]);
    }

    #[test]
    fn test_empty_search_and_tag_are_ignored() {
        let query = PromptQuery {
            search: Some(String::new()),
            tag: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(query.apply(vec![titled("A"), titled("B")]).len(), 2);
    }
}
