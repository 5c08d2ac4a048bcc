//! Generic repository abstraction.
//!
//! Storage is an external collaborator; the handlers in the bounded contexts
//! only ever see this trait.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainError;

/// Data-access contract over a single entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Returns every entity currently stored, in store order.
    async fn get_all(&self) -> Result<Vec<T>, DomainError>;

    /// Fetches a single entity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when no entity has `id`.
    async fn get_one(&self, id: i64) -> Result<T, DomainError>;

    /// Stores a new entity, assigning an identity if it has none, and returns
    /// the stored value.
    async fn insert(&self, entity: T) -> Result<T, DomainError>;

    /// Replaces the stored entity with the same id. Returns `false` if there
    /// is no such entity.
    async fn update(&self, entity: T) -> Result<bool, DomainError>;

    /// Removes the entity with `id`. Returns `false` if it did not exist.
    async fn remove(&self, id: i64) -> Result<bool, DomainError>;

    /// Removes the stored entity matching `entity`'s identity.
    async fn remove_entity(&self, entity: &T) -> Result<bool, DomainError> {
        self.remove(entity.id()).await
    }
}
