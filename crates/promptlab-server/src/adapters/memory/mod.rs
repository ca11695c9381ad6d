//! In-Memory Store Implementation

mod store;

pub use store::InMemoryStore;
