//! `PostgreSQL` implementation of the `Repository` trait.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;
use ticketdesk_accounts::domain::entities::AdminUser;
use ticketdesk_catalog::domain::entities::{Event, Guest, Ticket};
use ticketdesk_core::error::DomainError;
use ticketdesk_core::repository::Repository;
use tracing::debug;

use crate::tables::PgTable;

/// Repository over the events table.
pub type PgEventRepository = PgRepository<Event>;
/// Repository over the tickets table.
pub type PgTicketRepository = PgRepository<Ticket>;
/// Repository over the guests table.
pub type PgGuestRepository = PgRepository<Guest>;
/// Repository over the admin users table.
pub type PgAdminUserRepository = PgRepository<AdminUser>;

/// PostgreSQL-backed repository for any entity with a [`PgTable`] mapping.
#[derive(Debug)]
pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<T> PgRepository<T> {
    /// Creates a new `PgRepository` on `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn infrastructure(err: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(format!("database error: {err}"))
}

fn select_columns<T: PgTable>() -> String {
    std::iter::once("id")
        .chain(T::COLUMNS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholders(range: std::ops::RangeInclusive<usize>) -> String {
    range.map(|n| format!("${n}")).collect::<Vec<_>>().join(", ")
}

fn select_all_sql<T: PgTable>() -> String {
    format!("SELECT {} FROM {} ORDER BY id", select_columns::<T>(), T::TABLE)
}

fn select_one_sql<T: PgTable>() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", select_columns::<T>(), T::TABLE)
}

fn insert_sql<T: PgTable>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders(1..=T::COLUMNS.len()),
        select_columns::<T>(),
    )
}

fn insert_with_id_sql<T: PgTable>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        T::TABLE,
        select_columns::<T>(),
        placeholders(1..=T::COLUMNS.len() + 1),
        select_columns::<T>(),
    )
}

fn sync_sequence_sql<T: PgTable>() -> String {
    format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
         (SELECT COALESCE(MAX(id), 1) FROM {table}))",
        table = T::TABLE,
    )
}

fn update_sql<T: PgTable>() -> String {
    let assignments = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {assignments} WHERE id = ${}",
        T::TABLE,
        T::COLUMNS.len() + 1
    )
}

fn delete_sql<T: PgTable>() -> String {
    format!("DELETE FROM {} WHERE id = $1", T::TABLE)
}

#[async_trait]
impl<T: PgTable> Repository<T> for PgRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        let sql = select_all_sql::<T>();
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        rows.iter()
            .map(T::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| infrastructure(&e))
    }

    async fn get_one(&self, id: i64) -> Result<T, DomainError> {
        let sql = select_one_sql::<T>();
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?
            .ok_or_else(|| DomainError::not_found::<T>(id))?;
        T::from_row(&row).map_err(|e| infrastructure(&e))
    }

    async fn insert(&self, entity: T) -> Result<T, DomainError> {
        let row = if entity.has_unassigned_id() {
            let sql = insert_sql::<T>();
            entity
                .bind_columns(sqlx::query(&sql))
                .fetch_one(&self.pool)
                .await
                .map_err(|e| infrastructure(&e))?
        } else {
            let sql = insert_with_id_sql::<T>();
            let row = entity
                .bind_columns(sqlx::query(&sql).bind(entity.id()))
                .fetch_one(&self.pool)
                .await
                .map_err(|e| infrastructure(&e))?;
            let sync_sql = sync_sequence_sql::<T>();
            sqlx::query(&sync_sql)
                .execute(&self.pool)
                .await
                .map_err(|e| infrastructure(&e))?;
            row
        };
        let stored = T::from_row(&row).map_err(|e| infrastructure(&e))?;
        debug!(table = T::TABLE, id = stored.id(), "row inserted");
        Ok(stored)
    }

    async fn update(&self, entity: T) -> Result<bool, DomainError> {
        let sql = update_sql::<T>();
        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: i64) -> Result<bool, DomainError> {
        let sql = delete_sql::<T>();
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(result.rows_affected() > 0)
    }
}
