//! Command handlers for the Admin Accounts context.

use ticketdesk_core::command::Command;
use ticketdesk_core::entity::UNASSIGNED_ID;
use ticketdesk_core::error::DomainError;
use ticketdesk_core::repository::Repository;
use tracing::{info, instrument};

use crate::domain::commands::{RegisterAdminUser, RemoveAdminUser};
use crate::domain::credentials::password_digest;
use crate::domain::entities::AdminUser;

/// Handles the `RegisterAdminUser` command: checks the username is free and
/// stores the account with a digest of its password.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank username or password or a
/// username that is already taken, and propagates repository errors.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), username = %command.username))]
pub async fn handle_register_admin_user(
    command: &RegisterAdminUser,
    admin_users: &dyn Repository<AdminUser>,
) -> Result<AdminUser, DomainError> {
    let username = command.username.trim();
    if username.is_empty() {
        return Err(DomainError::Validation("username must not be blank".into()));
    }
    if command.password.is_empty() {
        return Err(DomainError::Validation("password must not be empty".into()));
    }
    let taken = admin_users
        .get_all()
        .await?
        .iter()
        .any(|user| user.username == username);
    if taken {
        return Err(DomainError::Validation(format!(
            "username {username:?} is already taken"
        )));
    }

    let user = admin_users
        .insert(AdminUser {
            id: UNASSIGNED_ID,
            username: username.to_owned(),
            password_hash: password_digest(username, &command.password),
        })
        .await?;

    info!(admin_user_id = user.id, "admin user registered");
    Ok(user)
}

/// Handles the `RemoveAdminUser` command. Returns `false` if the account did
/// not exist.
///
/// # Errors
///
/// Propagates repository errors.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), admin_user_id = command.admin_user_id))]
pub async fn handle_remove_admin_user(
    command: &RemoveAdminUser,
    admin_users: &dyn Repository<AdminUser>,
) -> Result<bool, DomainError> {
    let removed = admin_users.remove(command.admin_user_id).await?;
    info!(removed, "admin user removal handled");
    Ok(removed)
}
