//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;
use ticketdesk_accounts::domain::entities::AdminUser;
use ticketdesk_catalog::domain::entities::{Event, Guest, Ticket};
use ticketdesk_core::repository::Repository;
use ticketdesk_store::{
    PgAdminUserRepository, PgEventRepository, PgGuestRepository, PgTicketRepository,
};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Event storage.
    pub events: Arc<dyn Repository<Event>>,
    /// Ticket storage.
    pub tickets: Arc<dyn Repository<Ticket>>,
    /// Guest storage.
    pub guests: Arc<dyn Repository<Guest>>,
    /// Administrator storage.
    pub admin_users: Arc<dyn Repository<AdminUser>>,
}

impl AppState {
    /// Create new application state from explicit repositories.
    #[must_use]
    pub fn new(
        events: Arc<dyn Repository<Event>>,
        tickets: Arc<dyn Repository<Ticket>>,
        guests: Arc<dyn Repository<Guest>>,
        admin_users: Arc<dyn Repository<AdminUser>>,
    ) -> Self {
        Self {
            events,
            tickets,
            guests,
            admin_users,
        }
    }

    /// Create application state backed by PostgreSQL repositories on `pool`.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgEventRepository::new(pool.clone())),
            Arc::new(PgTicketRepository::new(pool.clone())),
            Arc::new(PgGuestRepository::new(pool.clone())),
            Arc::new(PgAdminUserRepository::new(pool)),
        )
    }
}
