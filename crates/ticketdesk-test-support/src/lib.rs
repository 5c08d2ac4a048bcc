//! Shared test doubles and utilities for the Ticketdesk administration system.

mod repository;

pub use repository::{FailingRepository, InMemoryRepository, RepositoryCalls};
