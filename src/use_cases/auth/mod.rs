pub mod identity;
pub mod login;
pub mod password;
pub mod register;
pub mod types;
pub mod update_details;
pub mod update_password;

use common::token::TokenCodec;
use uuid::Uuid;

use crate::{auth::types::TokenIssued, error_500, UseCaseError};

pub(crate) fn issue_token<C: TokenCodec>(codec: &C, user_id: Uuid) -> Result<TokenIssued, UseCaseError> {
    codec
        .issue(user_id)
        .map(|token| TokenIssued { token })
        .map_err(error_500)
}
