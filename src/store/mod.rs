//! Document storage for groups, players and tournaments.
//!
//! Every read hands out a clone and every write swaps a whole document, so callers work on
//! snapshots and the last `replace` of a document wins.

mod demo;
mod memory;

pub use demo::{seed_demo, SeedError, DEMO_GROUP_NAME};
pub use memory::MemoryRepository;

use crate::models::{Group, Player, Tournament};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A lock holder panicked; the collection can no longer be trusted.
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("document {0} already exists")]
    Duplicate(Uuid),
    #[error("document {0} does not exist")]
    Missing(Uuid),
}

/// Anything stored as a top-level document.
pub trait Document: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Document for Group {
    fn id(&self) -> Uuid {
        self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Document for Player {
    fn id(&self) -> Uuid {
        self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Document for Tournament {
    fn id(&self) -> Uuid {
        self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One collection of documents.
pub trait Repository<T: Document>: Send + Sync {
    fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError>;

    /// Add a new document. Fails if the id is taken.
    fn insert(&self, doc: T) -> Result<(), StoreError>;

    /// Overwrite an existing document. Fails if the id is unknown.
    fn replace(&self, doc: T) -> Result<(), StoreError>;

    /// Remove a document; `false` if it was not there.
    fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Documents matching `filter`, oldest first.
    fn query(&self, filter: &dyn Fn(&T) -> bool) -> Result<Vec<T>, StoreError>;

    fn all(&self) -> Result<Vec<T>, StoreError> {
        self.query(&|_| true)
    }
}

/// The three collections the service works with.
#[derive(Default)]
pub struct Store {
    pub groups: MemoryRepository<Group>,
    pub players: MemoryRepository<Player>,
    pub tournaments: MemoryRepository<Tournament>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
