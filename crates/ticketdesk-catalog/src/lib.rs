//! Ticketdesk: Events, Tickets & Guests bounded context.
//!
//! Responsible for the event catalogue, guest records and ticket sales, and
//! for the reports derived from them (sales per event, tickets per guest,
//! gender counts per event).

pub mod application;
pub mod domain;

#[cfg(test)]
pub(crate) mod fixtures;
