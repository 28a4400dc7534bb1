//! Password hashing
//!
//! bcrypt is CPU-bound, so both operations run on the blocking pool.

use brain_common::{Error, Result};
use tokio::sync::OnceCell;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Stand-in hash compared against when the account does not exist
static PLACEHOLDER_HASH: OnceCell<String> = OnceCell::const_new();

/// Hash a plaintext password with a fresh salt
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|e| Error::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| Error::Internal(format!("Password hashing failed: {e}")))
}

/// Compare a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::Internal(format!("Password verification task failed: {e}")))?;

    match matched {
        Ok(matched) => Ok(matched),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}

/// Run a full bcrypt comparison for a login whose account does not exist,
/// so an unknown email costs the same time as a wrong password.
pub async fn verify_password_without_account(password: String) -> Result<()> {
    let hash = PLACEHOLDER_HASH
        .get_or_try_init(|| hash_password("placeholder-password".to_string()))
        .await?;

    verify_password(password, hash.clone()).await?;
    Ok(())
}
