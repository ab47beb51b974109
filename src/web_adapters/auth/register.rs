use actix_web::{
    http::StatusCode,
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::token::PasetoCodec;
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    auth::{register::register_user, types::RegisterRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_500, response_token};

#[tracing::instrument(name = "Registering a user", skip(db, codec, req), fields(email = &req.email))]
#[post("/register")]
pub async fn register_endpoint(
    db: Data<DbConn>,
    codec: Data<PasetoCodec>,
    req: Json<RegisterRequest>,
) -> HttpResponse {
    match register_user(req.into_inner(), codec.get_ref(), UserAdapter::init(&db)).await {
        Ok(issued) => response_token(StatusCode::CREATED, issued),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
