//! Repository for the `contacts` table.

use rolodex_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::contact::{Contact, ContactPage, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone";

/// Provides create, paginated-list, and delete operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row with its assigned id.
    ///
    /// No uniqueness is enforced beyond `id`; duplicate names, emails, and
    /// phones are permitted.
    pub async fn create(pool: &SqlitePool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of contacts in insertion order, together with the
    /// total row count across the whole table.
    ///
    /// The count and the page are two separate reads; with a single writer
    /// they observe the same state.
    pub async fn list(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<ContactPage, sqlx::Error> {
        let total = Self::count(pool).await?;

        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             ORDER BY id ASC
             LIMIT ? OFFSET ?"
        );
        let contacts = sqlx::query_as::<_, Contact>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok(ContactPage { contacts, total })
    }

    /// Count all contacts.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await
    }

    /// Delete a contact by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
