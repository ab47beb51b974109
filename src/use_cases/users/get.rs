use db_adapters::user_adapter::{UserAdapter, UserQuery};
use entities::user;
use uuid::Uuid;

use crate::{error_500, UseCaseError};

pub async fn get_user<'a>(
    user_id: Uuid,
    user_adapter: UserAdapter<'a>,
) -> Result<user::Model, UseCaseError> {
    user_adapter
        .get_by_id(user_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(format!(
            "No user with the id of {}",
            user_id
        )))
}
