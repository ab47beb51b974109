use actix_web::{
    delete,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{access_control::USER_ACCESS, users::delete::delete_user, UseCaseError};

use crate::{
    utils::{response_200, response_404, response_500},
    RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a user", skip(db))]
#[delete("/{user_id}", wrap = "RequireRole::new(USER_ACCESS.delete)")]
pub async fn delete_user_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match delete_user(path_param.user_id, UserAdapter::init(&db)).await {
        Ok(()) => response_200(serde_json::json!({})),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
