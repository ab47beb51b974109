use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{access_control::USER_ACCESS, users::get::get_user, UseCaseError};

use crate::{
    utils::{response_200, response_404, response_500},
    RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a user", skip(db))]
#[get("/{user_id}", wrap = "RequireRole::new(USER_ACCESS.read)")]
pub async fn get_user_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_user(path_param.user_id, UserAdapter::init(&db)).await {
        Ok(user) => response_200(user),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
