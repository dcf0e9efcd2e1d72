//! Salted password hashing.
//!
//! Hashes are stored as `<salt hex>$<sha256 hex>` where the digest covers the
//! salt followed by the password bytes.

use sha2::{Digest, Sha256};

use crate::server::error::{internal::InternalError, AppError};

const SALT_LEN: usize = 16;

fn digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();

    format!("{}${}", hex::encode(salt), digest(&salt, password))
}

/// Checks a password against a stored hash.
///
/// # Arguments
/// - `user_id` - Owner of the hash, used in the error for malformed hashes
/// - `password` - Candidate password
/// - `stored` - Hash produced by `hash_password`
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr)` - Stored hash is not in the expected form
pub fn verify_password(user_id: i32, password: &str, stored: &str) -> Result<bool, AppError> {
    let malformed = || InternalError::MalformedPasswordHash { user_id };

    let (salt_hex, digest_hex) = stored.split_once('$').ok_or_else(malformed)?;
    let salt = hex::decode(salt_hex).map_err(|_| malformed())?;

    Ok(digest(&salt, password) == digest_hex)
}
