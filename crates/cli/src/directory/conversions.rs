//! Conversions from generated GraphQL response types to domain types.

use roster_core::{User, UserId};

use super::queries::{create_user, delete_user, get_users, update_user};

macro_rules! impl_user_from {
    ($($generated:ty),+ $(,)?) => {
        $(
            impl From<$generated> for User {
                fn from(user: $generated) -> Self {
                    Self {
                        id: UserId::new(user.id),
                        name: user.name,
                        email: user.email,
                    }
                }
            }
        )+
    };
}

impl_user_from!(
    get_users::GetUsersUsers,
    create_user::CreateUserCreateUser,
    update_user::UpdateUserUpdateUser,
    delete_user::DeleteUserDeleteUser,
);
