//! Credential hashing for signup.
//!
//! Argon2id with the crate's default cost parameters and a fresh OS-random
//! salt per password, encoded as a PHC string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::error::ApiError;

/// Hash `plain` on the blocking pool. `plain` is consumed and dropped as
/// soon as the hash exists.
pub async fn hash_password(plain: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || derive_hash(plain))
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("error processing password: {e}"),
        })?
}

fn derive_hash(plain: String) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal {
            message: format!("error processing password: {e}"),
        })
}
