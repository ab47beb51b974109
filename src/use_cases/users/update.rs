use db_adapters::user_adapter::{UpdateUserParams, UserAdapter, UserMutation};
use entities::user;
use uuid::Uuid;

use crate::{
    auth::register::DUPLICATE_EMAIL,
    db_error,
    users::{get::get_user, types::UserUpdateRequest},
    validation::{bounded, email},
    UseCaseError,
};

pub async fn update_user<'a>(
    user_id: Uuid,
    params: UserUpdateRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<user::Model, UseCaseError> {
    let name = params
        .name
        .as_deref()
        .map(|name| bounded("name", name, 50))
        .transpose()?;
    let email = params.email.as_deref().map(email).transpose()?;

    let user = get_user(user_id, user_adapter.clone()).await?;
    user_adapter
        .update(
            user,
            UpdateUserParams {
                name,
                email,
                role: params.role,
            },
        )
        .await
        .map_err(db_error(DUPLICATE_EMAIL))
}
