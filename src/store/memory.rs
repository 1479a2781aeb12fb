//! In-memory repository implementation.
//!
//! Holds the show collection behind a `parking_lot::RwLock` so reads and the
//! single-append write keep the same apparent atomicity on a multi-threaded
//! runtime that the collection would have under a single-threaded event loop.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{RepositoryResult, ShowRepository};
use crate::models::{NewShow, Show, ShowId};

/// In-memory show repository, seeded with the fixed catalogue at
/// construction time.
pub struct InMemoryRepository {
    shows: RwLock<Vec<Show>>,
}

impl InMemoryRepository {
    /// Create a repository seeded with the four fixed records.
    pub fn new() -> Self {
        Self {
            shows: RwLock::new(seed_shows()),
        }
    }

    /// Create an empty repository. Used by tests that need a clean slate.
    pub fn empty() -> Self {
        Self {
            shows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_shows() -> Vec<Show> {
    vec![
        Show {
            show_id: 1,
            title: "The Lion King".to_string(),
            theatre_id: 1,
            time: "7:00 PM".to_string(),
        },
        Show {
            show_id: 2,
            title: "Hamilton".to_string(),
            theatre_id: 2,
            time: "8:00 PM".to_string(),
        },
        Show {
            show_id: 3,
            title: "Wicked".to_string(),
            theatre_id: 3,
            time: "9:00 PM".to_string(),
        },
        Show {
            show_id: 4,
            title: "Les Misérables".to_string(),
            theatre_id: 1,
            time: "6:00 PM".to_string(),
        },
    ]
}

#[async_trait]
impl ShowRepository for InMemoryRepository {
    async fn list_shows(&self) -> RepositoryResult<Vec<Show>> {
        Ok(self.shows.read().clone())
    }

    async fn fetch_show(&self, id: ShowId) -> RepositoryResult<Option<Show>> {
        // Linear scan; the catalogue stays small enough that an index
        // would be overhead.
        Ok(self
            .shows
            .read()
            .iter()
            .find(|show| show.show_id == id.value())
            .cloned())
    }

    async fn add_show(&self, candidate: NewShow) -> RepositoryResult<Show> {
        let mut shows = self.shows.write();
        let added = Show {
            show_id: shows.len() as i64 + 1,
            title: candidate.title,
            theatre_id: candidate.theatre_id,
            time: candidate.time,
        };
        shows.push(added.clone());
        Ok(added)
    }
}
