use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::USER_ACCESS,
    users::{types::UserUpdateRequest, update::update_user},
    UseCaseError,
};

use crate::{
    utils::{response_200, response_400, response_404, response_500},
    RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a user", skip(db))]
#[put("/{user_id}", wrap = "RequireRole::new(USER_ACCESS.update)")]
pub async fn update_user_endpoint(
    db: Data<DbConn>,
    req: Json<UserUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match update_user(path_param.user_id, req.into_inner(), UserAdapter::init(&db)).await {
        Ok(user) => response_200(user),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
