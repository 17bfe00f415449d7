//! Contact entity model and DTOs.

use rolodex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact row from the `contacts` table.
///
/// Doubles as the wire shape: the API serializes rows as-is and the client
/// deserializes them back.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// DTO for creating a new contact.
///
/// Missing fields deserialize as empty strings so that field validation
/// reports which field is absent, rather than the whole body being
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// One page of contacts plus the total row count across the whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub total: i64,
}
