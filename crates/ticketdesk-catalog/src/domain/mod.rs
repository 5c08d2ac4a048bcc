//! Domain layer for the Events, Tickets & Guests context.

pub mod commands;
pub mod entities;
pub mod gender;
pub mod reports;
pub mod validation;
