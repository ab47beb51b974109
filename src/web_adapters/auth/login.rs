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
    auth::{login::login, types::LoginRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_500, response_token};

#[tracing::instrument(name = "Logging a user in", skip(db, codec, req), fields(email = &req.email))]
#[post("/login")]
pub async fn login_endpoint(
    db: Data<DbConn>,
    codec: Data<PasetoCodec>,
    req: Json<LoginRequest>,
) -> HttpResponse {
    match login(req.into_inner(), codec.get_ref(), UserAdapter::init(&db)).await {
        Ok(issued) => response_token(StatusCode::OK, issued),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::Unauthorized(message) => response_401(message),
            _ => response_500(e),
        },
    }
}
