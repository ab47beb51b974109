use db_adapters::user_adapter::{CreateUserParams, UserAdapter, UserMutation};
use entities::{sea_orm_active_enums::Role, user};

use crate::{
    auth::{
        password::{hash, validate_new_password},
        register::DUPLICATE_EMAIL,
    },
    db_error,
    users::types::UserCreateRequest,
    validation::{bounded, email},
    UseCaseError,
};

pub async fn create_user<'a>(
    params: UserCreateRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<user::Model, UseCaseError> {
    let name = bounded("name", &params.name, 50)?;
    let email = email(&params.email)?;
    validate_new_password(&params.password)?;

    user_adapter
        .create(CreateUserParams {
            name,
            email,
            password: hash(params.password.as_bytes())?,
            role: params.role.unwrap_or(Role::User),
        })
        .await
        .map_err(db_error(DUPLICATE_EMAIL))
}
