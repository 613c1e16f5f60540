//! Entity store: per-collection CRUD with sequential identity assignment.
//!
//! Calling code talks to the [`EntityStore`] trait so that the in-memory
//! [`MemoryStore`] can be swapped for a durable backend without touching the
//! HTTP layer. Not-found outcomes are `None`/`false` return values; the
//! `Err` side is reserved for the backend itself being unusable.

mod memory;
mod record;
mod repository;

#[cfg(test)]
pub(crate) mod tests;

pub use memory::{MemoryStore, Table};
pub use record::Record;
pub use repository::{ApplicationRepository, EntityStore, Repository, RepositoryError};
