//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models. The JSON shapes served over HTTP live in
//! the `api` crate.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// expenses
// ---------------------------------------------------------------------------

/// A persisted expense row. `date` is UTC wall-clock time.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ExpenseRow {
    pub id: i32,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDateTime,
}

/// The mutable columns of an expense, written as a unit by insert and update.
#[derive(Debug, Clone)]
pub struct ExpenseFields {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row, without the credential column.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Values inserted on signup. The hash is already derived; no plain
/// password ever reaches this crate.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
