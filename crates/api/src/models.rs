//! JSON shapes served and accepted over HTTP.

use chrono::{DateTime, Utc};
use db::models::{ExpenseFields, ExpenseRow, UserRow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Expense
// ---------------------------------------------------------------------------

/// A stored expense as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i32,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            amount: row.amount,
            category: row.category,
            date: row.date.and_utc(),
        }
    }
}

/// Body of create and update requests. Any `id` in the body is ignored.
///
/// `date` may carry any UTC offset; it is converted to UTC before storage,
/// so the offset itself is not kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseInput {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl ExpenseInput {
    /// Check field rules and convert to the persisted column set.
    pub fn into_fields(self) -> Result<ExpenseFields, ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "description",
            });
        }

        Ok(ExpenseFields {
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date.naive_utc(),
        })
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// Body of `POST /auth/signup`. The password is never printed.
#[derive(Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if self.password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        Ok(())
    }
}

/// A registered account. There is no credential field to leak.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            created_at: row.created_at.and_utc(),
        }
    }
}
