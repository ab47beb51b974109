use db_adapters::user_adapter::{UpdateUserParams, UserAdapter, UserMutation, UserQuery};
use entities::user;

use crate::{
    access_control::Principal,
    auth::{register::DUPLICATE_EMAIL, types::UpdateDetailsRequest},
    db_error, error_500,
    validation::{bounded, email},
    UseCaseError,
};

pub async fn update_details<'a>(
    principal: Principal,
    params: UpdateDetailsRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<user::Model, UseCaseError> {
    let name = params
        .name
        .as_deref()
        .map(|name| bounded("name", name, 50))
        .transpose()?;
    let email = params.email.as_deref().map(email).transpose()?;

    let user = user_adapter
        .clone()
        .get_by_id(principal.id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(format!(
            "No user with the id of {}",
            principal.id
        )))?;

    user_adapter
        .update(
            user,
            UpdateUserParams {
                name,
                email,
                role: None,
            },
        )
        .await
        .map_err(db_error(DUPLICATE_EMAIL))
}
