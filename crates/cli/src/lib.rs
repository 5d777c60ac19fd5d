//! Roster CLI - Directory client and interactive record editor.
//!
//! # Modules
//!
//! - [`config`] - Endpoint configuration from flags and environment
//! - [`directory`] - Typed GraphQL client for the record store
//! - [`session`] - Focus-sync editing session over a directory
//! - [`render`] - Plain-text output of users and the edit form
//! - [`commands`] - One-shot subcommands and the interactive shell

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod directory;
pub mod render;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use directory::{ClientError, DirectoryClient, UserDirectory};
pub use session::{Session, SessionError, SubmitOutcome};
