//! Repository layer for the show collection.
//!
//! The `ShowRepository` trait abstracts the storage backend so handlers can
//! receive it by dependency injection; `InMemoryRepository` is the only
//! implementation, holding the seeded collection in process memory.

pub mod error;
pub mod memory;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryRepository;

use async_trait::async_trait;

use crate::models::{NewShow, Show, ShowId};

/// Storage operations over the show collection.
///
/// The collection is append-only: no operation removes or mutates an
/// existing record.
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Return the full ordered sequence of shows. Side-effect-free.
    async fn list_shows(&self) -> RepositoryResult<Vec<Show>>;

    /// Return the first show whose id matches, or `None`. Side-effect-free.
    async fn fetch_show(&self, id: ShowId) -> RepositoryResult<Option<Show>>;

    /// Construct a record with `show_id = collection length + 1`, append it,
    /// and return the created record.
    async fn add_show(&self, candidate: NewShow) -> RepositoryResult<Show>;
}
