//! Collection Application Service (Use Case)
//!
//! Orchestrates domain operations for Collection management.

use std::sync::Arc;

use promptlab::{Collection, CollectionPatch, DomainError, NewCollection, Store};

/// Application service for Collection operations
pub struct CollectionService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> CollectionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get all Collections
    pub fn list_all(&self) -> Vec<Collection> {
        self.store.get_all_collections()
    }

    /// Get a Collection by ID
    pub fn get_by_id(&self, id: &str) -> Option<Collection> {
        self.store.get_collection(id)
    }

    /// Create a new Collection
    pub fn create(&self, draft: NewCollection) -> Result<Collection, DomainError> {
        let collection = Collection::new(draft)?;
        let saved = self.store.create_collection(collection);

        tracing::info!("Created Collection: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Update a Collection
    pub fn update(
        &self,
        id: &str,
        patch: CollectionPatch,
    ) -> Result<Option<Collection>, DomainError> {
        let updated = self
            .store
            .modify_collection(id, |current| current.merge(patch))?;
        if let Some(collection) = &updated {
            tracing::info!("Updated Collection: {} ({})", collection.name, collection.id);
        }
        Ok(updated)
    }

    /// Delete a Collection; its prompts become unassigned
    pub fn delete(&self, id: &str) -> bool {
        let deleted = self.store.delete_collection(id);
        if deleted {
            tracing::info!("Deleted Collection: {}", id);
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use promptlab::{NewPrompt, Prompt};

    use crate::adapters::InMemoryStore;

    fn setup() -> (Arc<InMemoryStore>, CollectionService<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = CollectionService::new(Arc::clone(&store));
        (store, service)
    }

    fn draft(name: &str) -> NewCollection {
        NewCollection {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, service) = setup();
        let a = service.create(draft("A")).unwrap();
        let b = service.create(draft("B")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.list_all().len(), 2);
    }

    #[test]
    fn test_create_invalid_never_reaches_store() {
        let (store, service) = setup();
        assert_matches!(service.create(draft("")), Err(DomainError::Validation(_)));
        assert!(store.get_all_collections().is_empty());
    }

    #[test]
    fn test_update() {
        let (_, service) = setup();
        let created = service.create(draft("Old")).unwrap();
        let updated = service
            .update(
                &created.id,
                CollectionPatch {
                    name: Some("New".into()),
                    description: None,
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.created_at, created.created_at);
        assert_matches!(service.update("missing", CollectionPatch::default()), Ok(None));
    }

    #[test]
    fn test_concurrent_updates_keep_both_fields() {
        let (_, service) = setup();
        let service = Arc::new(service);

        for _ in 0..200 {
            let created = service.create(draft("Dev")).unwrap();
            let patches = [
                CollectionPatch {
                    name: Some("Renamed".into()),
                    description: None,
                },
                CollectionPatch {
                    name: None,
                    description: Some("Coding prompts".into()),
                },
            ];
            let handles: Vec<_> = patches
                .into_iter()
                .map(|patch| {
                    let service = Arc::clone(&service);
                    let id = created.id.clone();
                    std::thread::spawn(move || service.update(&id, patch).unwrap())
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            let stored = service.get_by_id(&created.id).unwrap();
            assert_eq!(stored.name, "Renamed");
            assert_eq!(stored.description.as_deref(), Some("Coding prompts"));
        }
    }

    #[test]
    fn test_delete_keeps_prompts() {
        let (store, service) = setup();
        let created = service.create(draft("Doomed")).unwrap();
        let prompt = store.create_prompt(
            Prompt::new(NewPrompt {
                title: "Filed".into(),
                content: "Body".into(),
                collection_id: Some(created.id.clone()),
                ..Default::default()
            })
            .unwrap(),
        );

        assert!(service.delete(&created.id));
        assert!(!service.delete(&created.id));
        assert_eq!(store.get_prompt(&prompt.id).unwrap().collection_id, None);
    }
}
