//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod sort_order;
mod tag;

pub use sort_order::*;
pub use tag::*;
