//! In-memory repositories and the seeded mock store
//!
//! Data lives only as long as the store; nothing is persisted.

use super::{Record, Repository};
use crate::catalog::{self, Comment, HistoryEntry, Lesson};
use crate::certificates::{self, EarnedCertificate, IssuedCertificate};
use crate::error::{PlatformError, Result};
use crate::simulator::{self, SimulationRecord};
use crate::users::{self, User};

/// Vec-backed repository preserving insertion order
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn find(&self, id: u32) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    fn insert(&mut self, record: T) {
        match self.records.iter().position(|r| r.id() == record.id()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    fn update(&mut self, record: T) -> Result<()> {
        let id = record.id();
        let existing = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(PlatformError::NotFound { entity: T::ENTITY, id })?;
        *existing = record;
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Result<T> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(PlatformError::NotFound { entity: T::ENTITY, id })?;
        Ok(self.records.remove(idx))
    }

    fn next_id(&self) -> u32 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Every repository the platform screens use, in one place
#[derive(Debug, Clone)]
pub struct MockStore {
    pub users: InMemoryRepository<User>,
    pub issued_certificates: InMemoryRepository<IssuedCertificate>,
    pub earned_certificates: InMemoryRepository<EarnedCertificate>,
    pub lessons: InMemoryRepository<Lesson>,
    pub comments: InMemoryRepository<Comment>,
    pub history: InMemoryRepository<HistoryEntry>,
    pub simulations: InMemoryRepository<SimulationRecord>,
    /// User shown on the profile screens
    pub current_user_id: u32,
}

impl MockStore {
    /// Store filled with the demo data shown by the screens
    pub fn seeded() -> Self {
        let store = Self {
            users: InMemoryRepository::with_records(users::mock_users()),
            issued_certificates: InMemoryRepository::with_records(certificates::mock_issued()),
            earned_certificates: InMemoryRepository::with_records(certificates::mock_earned()),
            lessons: InMemoryRepository::with_records(catalog::mock_lessons()),
            comments: InMemoryRepository::with_records(catalog::mock_comments()),
            history: InMemoryRepository::with_records(catalog::mock_history()),
            simulations: InMemoryRepository::with_records(simulator::mock_simulations()),
            current_user_id: users::CURRENT_USER_ID,
        };
        log::debug!(
            "Seeded mock store: {} users, {} lessons, {} issued certificates",
            store.users.len(),
            store.lessons.len(),
            store.issued_certificates.len()
        );
        store
    }

    /// Store with no records at all
    pub fn empty() -> Self {
        Self {
            users: InMemoryRepository::new(),
            issued_certificates: InMemoryRepository::new(),
            earned_certificates: InMemoryRepository::new(),
            lessons: InMemoryRepository::new(),
            comments: InMemoryRepository::new(),
            history: InMemoryRepository::new(),
            simulations: InMemoryRepository::new(),
            current_user_id: users::CURRENT_USER_ID,
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Record for Item {
        const ENTITY: &'static str = "item";
        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn test_insert_update_remove() {
        let mut repo: InMemoryRepository<Item> = InMemoryRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), 1);

        repo.insert(Item { id: 1, label: "a" });
        repo.insert(Item { id: 5, label: "b" });
        assert_eq!(repo.next_id(), 6);

        repo.update(Item { id: 1, label: "c" }).expect("known id");
        assert_eq!(repo.find(1).map(|i| i.label), Some("c"));

        let err = repo.update(Item { id: 9, label: "x" }).unwrap_err();
        assert!(matches!(err, PlatformError::NotFound { entity: "item", id: 9 }));

        let removed = repo.remove(5).expect("known id");
        assert_eq!(removed.label, "b");
        assert_eq!(repo.len(), 1);
        assert!(repo.get(5).is_err());
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut repo = InMemoryRepository::with_records(vec![Item { id: 1, label: "a" }]);
        repo.insert(Item { id: 1, label: "b" });
        assert_eq!(repo.list(), vec![Item { id: 1, label: "b" }]);
    }

    #[test]
    fn test_seeded_store() {
        let store = MockStore::seeded();
        assert_eq!(store.users.len(), 9);
        assert_eq!(store.issued_certificates.len(), 10);
        assert_eq!(store.earned_certificates.len(), 6);
        assert_eq!(store.lessons.len(), 6);
        assert_eq!(store.history.len(), 10);
        assert_eq!(store.simulations.len(), 3);
        assert!(store.users.find(store.current_user_id).is_some());

        let empty = MockStore::empty();
        assert!(empty.lessons.is_empty());
    }
}
