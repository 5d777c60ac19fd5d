//! Roster Core - Shared types library.
//!
//! This crate provides the types shared by all Roster components:
//! - `server` - The authoritative record store behind a GraphQL endpoint
//! - `cli` - The directory client and its interactive editor
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! servers or clients. This keeps the focus state machine testable without
//! any transport or terminal attached.
//!
//! # Modules
//!
//! - [`types`] - User records, creation and patch payloads, type-safe IDs
//! - [`focus`] - Which record the client is editing, and how that survives a refetch
//! - [`form`] - The edit form bound to the focused record, with required-field validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod focus;
pub mod form;
pub mod types;

pub use focus::{Focus, FocusEvent, next_focus};
pub use form::{EditForm, Submission, ValidationError};
pub use types::*;
