//! Admin authentication: argon2 credential checks and cookie-backed sessions.

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password};
pub use session::{AuthState, Session, SessionSettings};

use crate::db::{DbAdmin, PortalStorage};
use crate::error::PortalError;

/// Check a username/password pair. `Ok(None)` means the credentials were rejected.
pub async fn authenticate(
    storage: &PortalStorage,
    username: &str,
    password: &str,
) -> Result<Option<DbAdmin>, PortalError> {
    let Some(admin) = storage.find_admin_by_username(username).await? else {
        return Ok(None);
    };
    Ok(verify_password(&admin.password_hash, password).then_some(admin))
}
