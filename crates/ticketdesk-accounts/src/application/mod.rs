//! Application layer for the Admin Accounts context.

pub mod command_handlers;
pub mod query_handlers;
