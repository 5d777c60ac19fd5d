//! Core types for Roster.
//!
//! This module provides type-safe wrappers for the directory's domain concepts.

pub mod id;
pub mod user;

pub use id::UserId;
pub use user::{NewUser, User, UserPatch};
