use actix_web::{
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::Principal,
    auth::{types::UpdateDetailsRequest, update_details::update_details},
    UseCaseError,
};

use crate::{
    utils::{response_200, response_400, response_401, response_404, response_500, NOT_AUTHORIZED},
    RequireAuthenticated,
};

#[tracing::instrument(name = "Updating the current user's details", skip(db))]
#[put("/updatedetails", wrap = "RequireAuthenticated")]
pub async fn update_details_endpoint(
    db: Data<DbConn>,
    principal: Option<ReqData<Principal>>,
    req: Json<UpdateDetailsRequest>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match update_details(principal.into_inner(), req.into_inner(), UserAdapter::init(&db))
                .await
            {
                Ok(user) => response_200(user),
                Err(e) => match &e {
                    UseCaseError::BadRequest(message) => response_400(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
