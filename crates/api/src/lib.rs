//! `api` crate — HTTP REST API layer.
//!
//! Exposes, under the `/api` prefix:
//!   GET    /api/expenses
//!   POST   /api/expenses
//!   PUT    /api/expenses/{id}
//!   DELETE /api/expenses/{id}
//!   POST   /api/auth/signup

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod password;
pub mod server;

pub use error::{ApiError, ValidationError};
pub use server::{build_router, serve, ServerConfig, ServerError};

use db::DbPool;

/// Shared application state. Holds nothing mutable; every request goes
/// straight to the pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
