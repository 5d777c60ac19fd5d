//! CLI command implementations.
//!
//! - [`records`] - One-shot `list`, `create`, `update` and `delete`
//! - [`shell`] - Interactive editor driving a [`Session`](crate::session::Session)

pub mod records;
pub mod shell;

use std::io;

use roster_core::{UserId, ValidationError};
use thiserror::Error;

use crate::directory::ClientError;
use crate::session::SessionError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The directory request failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The session refused the action.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The directory has no user with this ID.
    #[error("no user with id {0}")]
    NotFound(UserId),

    /// A shell line named no known command.
    #[error("unknown command {0:?}, try `help`")]
    UnknownCommand(String),

    /// A shell command was given the wrong arguments.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}
