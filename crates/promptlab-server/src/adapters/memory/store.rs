//! In-memory implementation of Store
//!
//! Both entity maps sit behind one `RwLock`: lookups share it, every
//! mutation (including the collection-delete cascade and collection
//! reference checks) holds it exclusively for its whole sequence. Contents
//! live for the process lifetime only.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use promptlab::{Collection, DomainError, Prompt, Store};

#[derive(Debug, Default)]
struct StoreState {
    prompts: IndexMap<String, Prompt>,
    collections: IndexMap<String, Collection>,
}

impl StoreState {
    fn ensure_collection(&self, collection_id: Option<&str>) -> Result<(), DomainError> {
        match collection_id {
            Some(cid) if !self.collections.contains_key(cid) => {
                Err(DomainError::invalid_reference("Collection", cid))
            }
            _ => Ok(()),
        }
    }
}

/// Process-lifetime store for prompts and collections
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single insert/remove or a loop that only clears
    // collection_id, so a poisoned lock still guards consistent maps.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for InMemoryStore {
    fn create_prompt(&self, prompt: Prompt) -> Prompt {
        self.write()
            .prompts
            .insert(prompt.id.clone(), prompt.clone());
        prompt
    }

    fn create_prompt_checked(&self, prompt: Prompt) -> Result<Prompt, DomainError> {
        let mut state = self.write();
        state.ensure_collection(prompt.collection_id.as_deref())?;
        state.prompts.insert(prompt.id.clone(), prompt.clone());
        Ok(prompt)
    }

    fn get_prompt(&self, id: &str) -> Option<Prompt> {
        self.read().prompts.get(id).cloned()
    }

    fn get_all_prompts(&self) -> Vec<Prompt> {
        self.read().prompts.values().cloned().collect()
    }

    fn update_prompt(&self, id: &str, prompt: Prompt) -> Option<Prompt> {
        let mut state = self.write();
        let slot = state.prompts.get_mut(id)?;
        *slot = prompt.clone();
        Some(prompt)
    }

    fn modify_prompt<F>(&self, id: &str, f: F) -> Result<Option<Prompt>, DomainError>
    where
        F: FnOnce(&Prompt) -> Result<Prompt, DomainError>,
    {
        let mut state = self.write();
        let Some(current) = state.prompts.get(id) else {
            return Ok(None);
        };
        let updated = f(current)?;
        if updated.collection_id != current.collection_id {
            state.ensure_collection(updated.collection_id.as_deref())?;
        }
        if let Some(slot) = state.prompts.get_mut(id) {
            *slot = updated.clone();
        }
        Ok(Some(updated))
    }

    fn delete_prompt(&self, id: &str) -> bool {
        self.write().prompts.shift_remove(id).is_some()
    }

    fn create_collection(&self, collection: Collection) -> Collection {
        self.write()
            .collections
            .insert(collection.id.clone(), collection.clone());
        collection
    }

    fn get_collection(&self, id: &str) -> Option<Collection> {
        self.read().collections.get(id).cloned()
    }

    fn get_all_collections(&self) -> Vec<Collection> {
        self.read().collections.values().cloned().collect()
    }

    fn update_collection(&self, id: &str, collection: Collection) -> Option<Collection> {
        let mut state = self.write();
        let slot = state.collections.get_mut(id)?;
        *slot = collection.clone();
        Some(collection)
    }

    fn modify_collection<F>(&self, id: &str, f: F) -> Result<Option<Collection>, DomainError>
    where
        F: FnOnce(&Collection) -> Result<Collection, DomainError>,
    {
        let mut state = self.write();
        let Some(slot) = state.collections.get_mut(id) else {
            return Ok(None);
        };
        let updated = f(slot)?;
        *slot = updated.clone();
        Ok(Some(updated))
    }

    fn delete_collection(&self, id: &str) -> bool {
        let mut state = self.write();
        if state.collections.shift_remove(id).is_none() {
            return false;
        }

        let mut orphaned = 0usize;
        for prompt in state.prompts.values_mut() {
            if prompt.collection_id.as_deref() == Some(id) {
                prompt.collection_id = None;
                orphaned += 1;
            }
        }
        if orphaned > 0 {
            tracing::info!(collection_id = id, orphaned, "Orphaned prompts of deleted collection");
        }
        true
    }

    fn clear(&self) {
        let mut state = self.write();
        state.prompts.clear();
        state.collections.clear();
    }
}
