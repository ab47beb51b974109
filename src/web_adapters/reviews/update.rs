use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::{restaurant_adapter::RestaurantAdapter, review_adapter::ReviewAdapter};
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, REVIEW_ACCESS},
    reviews::{types::ReviewUpdateRequest, update::update_review},
    UseCaseError,
};

use crate::{
    utils::{response_200, response_400, response_401, response_404, response_500, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    review_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a review", skip(db))]
#[put(
    "/{review_id}",
    wrap = "RequireRole::new(REVIEW_ACCESS.update)",
    wrap = "RequireAuthenticated"
)]
pub async fn update_review_endpoint(
    db: Data<DbConn>,
    principal: Option<ReqData<Principal>>,
    req: Json<ReviewUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match update_review(
                principal.into_inner(),
                path_param.review_id,
                req.into_inner(),
                ReviewAdapter::init(&db),
                RestaurantAdapter::init(&db),
            )
            .await
            {
                Ok(review) => response_200(review),
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
