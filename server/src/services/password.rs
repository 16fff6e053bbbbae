//! Password hashing.
//!
//! bcrypt is CPU-bound, so both operations run on the blocking pool to
//! keep the async workers free.

use crate::error::ApiError;

/// Hash a password for storage.
///
/// # Errors
///
/// Returns `ApiError::Internal` if hashing fails or the blocking task is
/// cancelled.
pub async fn hash_password(password: &str) -> Result<String, ApiError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| ApiError::Internal(format!("hash task failed: {e}")))?
        .map_err(|e| ApiError::Internal(format!("password hash failed: {e}")))
}

/// Check a password against a stored hash.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the stored hash is malformed or the
/// blocking task is cancelled.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| ApiError::Internal(format!("verify task failed: {e}")))?
        .map_err(|e| ApiError::Internal(format!("password verify failed: {e}")))
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
