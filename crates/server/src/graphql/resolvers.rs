//! Root resolvers and the `User` output type.

use async_graphql::{Context, ID, Object, Result};
use roster_core::{NewUser, User, UserId, UserPatch};

use super::with_store;

/// A stored user as seen through GraphQL.
pub struct UserObject(User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.as_str())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every user, in insertion order.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        with_store(ctx, |store| {
            store.list().iter().cloned().map(UserObject).collect()
        })
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user under a freshly issued ID.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> Result<UserObject> {
        let new = NewUser::new(name, email);
        with_store(ctx, |store| UserObject(store.create(new)))
    }

    /// Overwrite the supplied fields. Null or empty fields are left alone.
    ///
    /// Resolves to `null` if no user has this ID.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<UserObject>> {
        let id = UserId::new(id.to_string());
        let patch = UserPatch::new(name, email);
        with_store(ctx, |store| store.update(&id, patch).map(UserObject))
    }

    /// Delete a user, resolving to its last value or `null` if unknown.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let id = UserId::new(id.to_string());
        with_store(ctx, |store| store.delete(&id).map(UserObject))
    }
}
