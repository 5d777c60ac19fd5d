//! GraphQL schema of the record store, served with `async-graphql`.
//!
//! # Schema
//!
//! ```graphql
//! type Query { users: [User!]! }
//! type Mutation {
//!   createUser(name: String!, email: String!): User!
//!   updateUser(id: ID!, name: String, email: String): User
//!   deleteUser(id: ID!): User
//! }
//! ```
//!
//! `updateUser` and `deleteUser` resolve to `null` when the ID is unknown;
//! that is a normal result, not an error. Mutation root fields run one after
//! another in document order, each under its own store lock.

mod resolvers;

pub use resolvers::{MutationRoot, QueryRoot, UserObject};

use async_graphql::{Context, EmptySubscription, Schema};

use crate::state::AppState;
use crate::store::UserStore;

/// The executable schema, carrying the [`AppState`] as context data.
pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around `state`.
#[must_use]
pub fn build_schema(state: AppState) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Run `f` against the store held in the request context.
fn with_store<T>(
    ctx: &Context<'_>,
    f: impl FnOnce(&mut UserStore) -> T,
) -> async_graphql::Result<T> {
    let state = ctx.data::<AppState>()?;
    Ok(state.with_store(f)?)
}
