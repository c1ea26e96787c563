//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool`, checks out one connection for a single
//! statement, and returns a `Result<T, DbError>`. No retries, no HTTP types.

pub mod expenses;
pub mod users;
