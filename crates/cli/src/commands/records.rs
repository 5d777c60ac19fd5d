//! One-shot record commands.
//!
//! # Usage
//!
//! ```bash
//! roster list
//! roster create --name Carol --email carol@example.com
//! roster update 2 --name Bobby
//! roster delete 1
//! ```

use std::io::Write;

use roster_core::{Focus, NewUser, UserId, UserPatch};
use tracing::info;

use super::CommandError;
use crate::directory::UserDirectory;
use crate::render;

/// Print every user.
///
/// # Errors
///
/// Returns `CommandError` if the request or the output fails.
pub async fn list<D: UserDirectory, W: Write>(directory: &D, out: &mut W) -> Result<(), CommandError> {
    let users = directory.list_users().await?;
    render::users(out, &users, &Focus::None)?;
    Ok(())
}

/// Create a user and print it.
///
/// Both fields are required and trimmed.
///
/// # Errors
///
/// Returns `CommandError::Validation` without contacting the directory if a
/// field is empty, otherwise any request or output failure.
pub async fn create<D: UserDirectory, W: Write>(
    directory: &D,
    name: &str,
    email: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let new = NewUser::validated(name, email)?;
    let user = directory.create_user(&new).await?;
    info!(user_id = %user.id, "Created user");
    render::user(out, &user)?;
    Ok(())
}

/// Patch a user and print its new value.
///
/// Fields left out, or given as empty strings, keep their stored value.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if the directory has no such user.
pub async fn update<D: UserDirectory, W: Write>(
    directory: &D,
    id: &UserId,
    name: Option<String>,
    email: Option<String>,
    out: &mut W,
) -> Result<(), CommandError> {
    let patch = UserPatch::new(name, email);
    let user = directory
        .update_user(id, &patch)
        .await?
        .ok_or_else(|| CommandError::NotFound(id.clone()))?;
    info!(user_id = %user.id, "Updated user");
    render::user(out, &user)?;
    Ok(())
}

/// Delete a user and print its last value.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if the directory has no such user.
pub async fn delete<D: UserDirectory, W: Write>(
    directory: &D,
    id: &UserId,
    out: &mut W,
) -> Result<(), CommandError> {
    let user = directory
        .delete_user(id)
        .await?
        .ok_or_else(|| CommandError::NotFound(id.clone()))?;
    info!(user_id = %user.id, "Deleted user");
    render::user(out, &user)?;
    Ok(())
}
