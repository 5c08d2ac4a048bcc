//! In-memory `Repository` implementations for tests.

use std::marker::PhantomData;
use std::sync::Mutex;

use async_trait::async_trait;
use ticketdesk_core::entity::Entity;
use ticketdesk_core::error::DomainError;
use ticketdesk_core::repository::Repository;

/// Counts of the read and removal calls made against an
/// `InMemoryRepository`, so tests can verify which repositories a handler
/// touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryCalls {
    /// Number of `get_all` calls.
    pub get_all: usize,
    /// Number of `get_one` calls.
    pub get_one: usize,
    /// Number of `insert` calls.
    pub insert: usize,
    /// Number of `update` calls.
    pub update: usize,
    /// Number of `remove` calls (including those made via `remove_entity`).
    pub remove: usize,
}

#[derive(Debug)]
struct Inner<T> {
    rows: Vec<T>,
    next_id: i64,
    calls: RepositoryCalls,
}

/// A repository backed by a `Vec`, preserving insertion order. Identities are
/// assigned from one past the largest seeded id.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create a repository pre-populated with `rows`.
    #[must_use]
    pub fn new(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                rows,
                next_id,
                calls: RepositoryCalls::default(),
            }),
        }
    }

    /// Returns a snapshot of the stored rows.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn rows(&self) -> Vec<T> {
        self.inner.lock().unwrap().rows.clone()
    }

    /// Returns the calls recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> RepositoryCalls {
        self.inner.lock().unwrap().calls
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.get_all += 1;
        Ok(inner.rows.clone())
    }

    async fn get_one(&self, id: i64) -> Result<T, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.get_one += 1;
        inner
            .rows
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found::<T>(id))
    }

    async fn insert(&self, mut entity: T) -> Result<T, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.insert += 1;
        if entity.has_unassigned_id() {
            let id = inner.next_id;
            entity.assign_id(id);
        }
        inner.next_id = inner.next_id.max(entity.id() + 1);
        inner.rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<bool, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update += 1;
        match inner.rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => {
                *row = entity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: i64) -> Result<bool, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.remove += 1;
        let before = inner.rows.len();
        inner.rows.retain(|row| row.id() != id);
        Ok(inner.rows.len() != before)
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingRepository<T>(PhantomData<fn() -> T>);

impl<T> Default for FailingRepository<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> FailingRepository<T> {
    /// Create a new failing repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl<T: Entity> Repository<T> for FailingRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        Err(connection_refused())
    }

    async fn get_one(&self, _id: i64) -> Result<T, DomainError> {
        Err(connection_refused())
    }

    async fn insert(&self, _entity: T) -> Result<T, DomainError> {
        Err(connection_refused())
    }

    async fn update(&self, _entity: T) -> Result<bool, DomainError> {
        Err(connection_refused())
    }

    async fn remove(&self, _id: i64) -> Result<bool, DomainError> {
        Err(connection_refused())
    }
}
