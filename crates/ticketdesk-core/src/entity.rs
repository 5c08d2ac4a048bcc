//! Entity identity contract.

/// Identifier value meaning "not yet assigned by the store".
pub const UNASSIGNED_ID: i64 = 0;

/// A persisted record with a unique `i64` identity.
pub trait Entity: Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Human-readable kind used in errors and logs.
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> i64;

    /// Overwrites the entity identifier. Called by stores on insert.
    fn assign_id(&mut self, id: i64);

    /// Whether the store still has to assign an identity.
    fn has_unassigned_id(&self) -> bool {
        self.id() == UNASSIGNED_ID
    }
}
