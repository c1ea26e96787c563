//! Route handlers. Each one checks out a single pooled connection (through
//! the `db` repository functions) for exactly one statement.

pub mod auth;
pub mod expenses;
