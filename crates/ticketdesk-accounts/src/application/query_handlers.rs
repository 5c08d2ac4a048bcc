//! Query handlers for the Admin Accounts context.

use ticketdesk_core::error::DomainError;
use ticketdesk_core::repository::Repository;
use tracing::{info, instrument};

use crate::domain::credentials::verify_password;
use crate::domain::entities::AdminUser;

/// Returns every administrator account.
///
/// # Errors
///
/// Propagates repository errors unchanged.
pub async fn get_all_admin_users(
    admin_users: &dyn Repository<AdminUser>,
) -> Result<Vec<AdminUser>, DomainError> {
    admin_users.get_all().await
}

/// Checks a username/password pair against the stored accounts.
///
/// Unknown usernames and wrong passwords both yield `false`.
///
/// # Errors
///
/// Propagates repository errors unchanged.
#[instrument(skip(password, admin_users))]
pub async fn verify_admin_credentials(
    username: &str,
    password: &str,
    admin_users: &dyn Repository<AdminUser>,
) -> Result<bool, DomainError> {
    let username = username.trim();
    let verified = admin_users
        .get_all()
        .await?
        .iter()
        .find(|user| user.username == username)
        .is_some_and(|user| verify_password(username, password, &user.password_hash));
    info!(verified, "admin credentials checked");
    Ok(verified)
}
