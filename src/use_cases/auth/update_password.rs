use common::token::TokenCodec;
use db_adapters::user_adapter::{UserAdapter, UserMutation, UserQuery};

use crate::{
    access_control::Principal,
    auth::{
        issue_token,
        password::{hash, validate_new_password, verify_password},
        types::{TokenIssued, UpdatePasswordRequest},
    },
    error_500, UseCaseError,
};

#[tracing::instrument(name = "Changing a user password", skip(params, codec, user_adapter))]
pub async fn update_password<'a, C: TokenCodec>(
    principal: Principal,
    params: UpdatePasswordRequest,
    codec: &C,
    user_adapter: UserAdapter<'a>,
) -> Result<TokenIssued, UseCaseError> {
    let user = user_adapter
        .clone()
        .get_by_id(principal.id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(format!(
            "No user with the id of {}",
            principal.id
        )))?;

    if verify_password(&user.password, params.current_password.as_bytes()).is_err() {
        return Err(UseCaseError::Unauthorized(
            "Password is incorrect".to_string(),
        ));
    }
    validate_new_password(&params.new_password)?;

    let user = user_adapter
        .update_password(user, hash(params.new_password.as_bytes())?)
        .await
        .map_err(error_500)?;
    issue_token(codec, user.id)
}
