//! Repository Ports
//!
//! Abstract interfaces for storage operations.

mod store;

pub use store::*;
