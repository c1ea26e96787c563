//! `db` crate — pure persistence layer.
//!
//! Provides the connection pool, the schema initializer, typed row structs,
//! and repository functions for the `expenses` and `users` tables.
//! No HTTP types and no request parsing live here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use pool::{DbPool, PoolConfig};
pub use schema::ensure_schema;
