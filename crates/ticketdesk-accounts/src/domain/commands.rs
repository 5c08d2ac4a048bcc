//! Commands for the Admin Accounts context.

use ticketdesk_core::command::Command;
use uuid::Uuid;

/// Command to register an administrator.
#[derive(Clone)]
pub struct RegisterAdminUser {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Requested login name.
    pub username: String,
    /// Clear-text password; only its digest is stored.
    pub password: String,
}

impl std::fmt::Debug for RegisterAdminUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterAdminUser")
            .field("correlation_id", &self.correlation_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Command for RegisterAdminUser {
    fn command_type(&self) -> &'static str {
        "accounts.register_admin_user"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove an administrator.
#[derive(Debug, Clone)]
pub struct RemoveAdminUser {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The account identifier.
    pub admin_user_id: i64,
}

impl Command for RemoveAdminUser {
    fn command_type(&self) -> &'static str {
        "accounts.remove_admin_user"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
