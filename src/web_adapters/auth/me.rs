use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{access_control::Principal, users::get::get_user, UseCaseError};

use crate::{
    utils::{response_200, response_401, response_404, response_500, NOT_AUTHORIZED},
    RequireAuthenticated,
};

#[tracing::instrument(name = "Getting the current user", skip(db))]
#[get("/me", wrap = "RequireAuthenticated")]
pub async fn me_endpoint(db: Data<DbConn>, principal: Option<ReqData<Principal>>) -> HttpResponse {
    match principal {
        Some(principal) => match get_user(principal.id, UserAdapter::init(&db)).await {
            Ok(user) => response_200(user),
            Err(e) => match &e {
                UseCaseError::NotFound(message) => response_404(message),
                _ => response_500(e),
            },
        },
        None => response_401(NOT_AUTHORIZED),
    }
}
