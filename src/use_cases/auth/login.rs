use common::token::TokenCodec;
use db_adapters::user_adapter::{UserAdapter, UserQuery};
use tracing::{event, Level};

use crate::{
    auth::{
        issue_token,
        password::verify_password,
        types::{LoginRequest, TokenIssued},
    },
    error_500, UseCaseError,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[tracing::instrument(name = "Logging a user in", skip(params, codec, user_adapter), fields(email = %params.email))]
pub async fn login<'a, C: TokenCodec>(
    params: LoginRequest,
    codec: &C,
    user_adapter: UserAdapter<'a>,
) -> Result<TokenIssued, UseCaseError> {
    let email = params.email.trim().to_lowercase();
    if email.is_empty() || params.password.is_empty() {
        return Err(UseCaseError::BadRequest(
            "Please provide an email and password".to_string(),
        ));
    }

    let user = user_adapter
        .get_by_email(email)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if verify_password(&user.password, params.password.as_bytes()).is_err() {
        return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    event!(target: "backend", Level::INFO, "User logged in successfully.");
    issue_token(codec, user.id)
}
