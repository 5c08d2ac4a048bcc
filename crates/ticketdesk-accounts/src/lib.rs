//! Ticketdesk: Admin Accounts bounded context.
//!
//! Responsible for the administrator accounts allowed to manage the
//! catalogue. Credentials are stored as salted digests only.

pub mod application;
pub mod domain;
