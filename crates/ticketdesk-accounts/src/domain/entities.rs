//! Entities for the Admin Accounts context.

use serde::Serialize;
use ticketdesk_core::entity::Entity;

/// An administrator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUser {
    /// Account identifier.
    pub id: i64,
    /// Login name, unique across accounts.
    pub username: String,
    /// Hex-encoded credential digest. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl Entity for AdminUser {
    const KIND: &'static str = "admin user";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}
