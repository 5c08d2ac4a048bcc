//! Application layer for the Events, Tickets & Guests context.

pub mod command_handlers;
pub mod query_handlers;
