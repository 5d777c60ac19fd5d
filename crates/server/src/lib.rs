//! Roster server library.
//!
//! This crate provides the record store and its GraphQL endpoint as a
//! library, allowing it to be tested and embedded.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::app;
pub use state::AppState;
