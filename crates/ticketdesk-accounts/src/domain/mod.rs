//! Domain layer for the Admin Accounts context.

pub mod commands;
pub mod credentials;
pub mod entities;
