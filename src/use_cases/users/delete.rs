use db_adapters::user_adapter::{UserAdapter, UserMutation};
use uuid::Uuid;

use crate::{error_500, UseCaseError};

pub async fn delete_user<'a>(user_id: Uuid, user_adapter: UserAdapter<'a>) -> Result<(), UseCaseError> {
    match user_adapter.delete(user_id).await.map_err(error_500)? {
        0 => Err(UseCaseError::NotFound(format!(
            "No user with the id of {}",
            user_id
        ))),
        _ => Ok(()),
    }
}
