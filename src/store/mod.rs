//! Record storage behind repository traits
//!
//! Every screen works against a [`Repository`] instead of owning its own
//! list, so the in-memory mock data can later be swapped for a real backend
//! without touching the commands.

mod memory;

pub use memory::{InMemoryRepository, MockStore};

use crate::error::{PlatformError, Result};

/// A stored entity with a numeric identity
pub trait Record: Clone {
    /// Entity name used in lookup errors
    const ENTITY: &'static str;

    fn id(&self) -> u32;
}

/// Read/write access to a collection of records
pub trait Repository<T: Record> {
    /// All records in storage order
    fn list(&self) -> Vec<T>;

    fn find(&self, id: u32) -> Option<T>;

    /// Add a record. An existing record with the same id is replaced.
    fn insert(&mut self, record: T);

    /// Replace an existing record, failing when its id is unknown
    fn update(&mut self, record: T) -> Result<()>;

    fn remove(&mut self, id: u32) -> Result<T>;

    /// Identifier for the next inserted record
    fn next_id(&self) -> u32 {
        self.list().iter().map(Record::id).max().unwrap_or(0) + 1
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`Repository::find`] but reports unknown ids as an error
    fn get(&self, id: u32) -> Result<T> {
        self.find(id).ok_or(PlatformError::NotFound { entity: T::ENTITY, id })
    }
}
