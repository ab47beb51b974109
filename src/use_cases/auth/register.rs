use common::token::TokenCodec;
use db_adapters::user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery};
use entities::sea_orm_active_enums::Role;

use crate::{
    auth::{
        issue_token,
        password::{hash, validate_new_password},
        types::{RegisterRequest, TokenIssued},
    },
    db_error, error_500,
    validation::{bounded, email},
    UseCaseError,
};

pub(crate) const DUPLICATE_EMAIL: &str = "Email is already registered";

#[tracing::instrument(name = "Registering a user", skip(params, codec, user_adapter), fields(email = %params.email))]
pub async fn register_user<'a, C: TokenCodec>(
    params: RegisterRequest,
    codec: &C,
    user_adapter: UserAdapter<'a>,
) -> Result<TokenIssued, UseCaseError> {
    let role = params.role.unwrap_or(Role::User);
    if role == Role::Admin {
        return Err(UseCaseError::BadRequest(
            "Admin accounts cannot be self-registered".to_string(),
        ));
    }
    let name = bounded("name", &params.name, 50)?;
    let email = email(&params.email)?;
    validate_new_password(&params.password)?;

    if user_adapter
        .clone()
        .get_by_email(email.clone())
        .await
        .map_err(error_500)?
        .is_some()
    {
        return Err(UseCaseError::BadRequest(DUPLICATE_EMAIL.to_string()));
    }

    let user = user_adapter
        .create(CreateUserParams {
            name,
            email,
            password: hash(params.password.as_bytes())?,
            role,
        })
        .await
        .map_err(db_error(DUPLICATE_EMAIL))?;

    issue_token(codec, user.id)
}
