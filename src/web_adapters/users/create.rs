use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::USER_ACCESS,
    users::{create::create_user, types::UserCreateRequest},
    UseCaseError,
};

use crate::{
    utils::{response_201, response_400, response_500},
    RequireRole,
};

#[tracing::instrument(name = "Creating a user", skip(db, req), fields(email = &req.email))]
#[post("", wrap = "RequireRole::new(USER_ACCESS.create)")]
pub async fn create_user_endpoint(db: Data<DbConn>, req: Json<UserCreateRequest>) -> HttpResponse {
    match create_user(req.into_inner(), UserAdapter::init(&db)).await {
        Ok(user) => response_201(user),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
