use actix_web::{
    http::StatusCode,
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use common::token::PasetoCodec;
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::Principal,
    auth::{types::UpdatePasswordRequest, update_password::update_password},
    UseCaseError,
};

use crate::{
    utils::{response_400, response_401, response_404, response_500, response_token, NOT_AUTHORIZED},
    RequireAuthenticated,
};

#[tracing::instrument(name = "Updating the current user's password", skip(db, codec, req))]
#[put("/updatepassword", wrap = "RequireAuthenticated")]
pub async fn update_password_endpoint(
    db: Data<DbConn>,
    codec: Data<PasetoCodec>,
    principal: Option<ReqData<Principal>>,
    req: Json<UpdatePasswordRequest>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match update_password(
                principal.into_inner(),
                req.into_inner(),
                codec.get_ref(),
                UserAdapter::init(&db),
            )
            .await
            {
                Ok(issued) => response_token(StatusCode::OK, issued),
                Err(e) => match &e {
                    UseCaseError::BadRequest(message) => response_400(message),
                    UseCaseError::Unauthorized(message) => response_401(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
