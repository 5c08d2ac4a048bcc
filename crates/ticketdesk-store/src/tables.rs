//! Table mappings for the persisted entities.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};
use ticketdesk_accounts::domain::entities::AdminUser;
use ticketdesk_catalog::domain::entities::{Event, Guest, Ticket};
use ticketdesk_core::entity::Entity;

/// A bindable `sqlx` query against PostgreSQL.
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Describes how an entity maps onto a table with a `BIGSERIAL id` primary
/// key.
pub trait PgTable: Entity + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Every column except `id`, in the order `bind_columns` binds them.
    const COLUMNS: &'static [&'static str];

    /// Builds the entity from a row selected as `id, COLUMNS...`.
    ///
    /// # Errors
    ///
    /// Returns the `sqlx` decode error for a missing or mistyped column.
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error>;

    /// Binds the values of `COLUMNS`, in order.
    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

impl PgTable for Event {
    const TABLE: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "organizer_name",
        "start_date",
        "end_date",
        "place",
        "entry_fee",
    ];

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            organizer_name: row.try_get("organizer_name")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            place: row.try_get("place")?,
            entry_fee: row.try_get("entry_fee")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.organizer_name.as_str())
            .bind(self.start_date.as_str())
            .bind(self.end_date.as_str())
            .bind(self.place.as_str())
            .bind(self.entry_fee)
    }
}

impl PgTable for Ticket {
    const TABLE: &'static str = "tickets";
    const COLUMNS: &'static [&'static str] = &[
        "ticket_type",
        "price_paid",
        "discount",
        "expiry",
        "order_info",
        "event_id",
        "guest_id",
    ];

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            ticket_type: row.try_get("ticket_type")?,
            price_paid: row.try_get("price_paid")?,
            discount: row.try_get("discount")?,
            expiry: row.try_get("expiry")?,
            order_info: row.try_get("order_info")?,
            event_id: row.try_get("event_id")?,
            guest_id: row.try_get("guest_id")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.ticket_type.as_str())
            .bind(self.price_paid)
            .bind(self.discount)
            .bind(self.expiry.as_str())
            .bind(self.order_info.as_str())
            .bind(self.event_id)
            .bind(self.guest_id)
    }
}

impl PgTable for Guest {
    const TABLE: &'static str = "guests";
    const COLUMNS: &'static [&'static str] = &["name", "city", "contact", "email", "gender"];

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            contact: row.try_get("contact")?,
            email: row.try_get("email")?,
            gender: row.try_get("gender")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.city.as_str())
            .bind(self.contact.as_str())
            .bind(self.email.as_str())
            .bind(self.gender.as_str())
    }
}

impl PgTable for AdminUser {
    const TABLE: &'static str = "admin_users";
    const COLUMNS: &'static [&'static str] = &["username", "password_hash"];

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.username.as_str())
            .bind(self.password_hash.as_str())
    }
}
