//! PostgreSQL-backed repositories for the Ticketdesk administration system.
//!
//! One generic [`PgRepository`] implements the core `Repository` contract
//! for every entity that describes its table through [`PgTable`].

use sqlx::migrate::Migrator;

pub mod pg_repository;
pub mod tables;

pub use pg_repository::{
    PgAdminUserRepository, PgEventRepository, PgGuestRepository, PgRepository,
    PgTicketRepository,
};
pub use tables::PgTable;

/// Schema migrations for every table the repositories use.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");
