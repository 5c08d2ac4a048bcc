//! Route modules organized by bounded context.

use serde::Serialize;

pub mod admin_users;
pub mod events;
pub mod guests;
pub mod health;
pub mod reports;
pub mod tickets;

#[cfg(test)]
pub(crate) mod testing;

/// Response body for removal endpoints.
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    /// Whether an entity existed and was removed.
    pub removed: bool,
}
