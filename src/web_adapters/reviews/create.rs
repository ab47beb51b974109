use actix_web::{
    post,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::{restaurant_adapter::RestaurantAdapter, review_adapter::ReviewAdapter};
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, REVIEW_ACCESS},
    reviews::{create::create_review, types::ReviewCreateRequest},
    UseCaseError,
};

use crate::{
    utils::{response_201, response_400, response_401, response_404, response_500, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    restaurant_id: uuid::Uuid,
}

#[tracing::instrument(name = "Creating a review", skip(db))]
#[post(
    "/{restaurant_id}/reviews",
    wrap = "RequireRole::new(REVIEW_ACCESS.create)",
    wrap = "RequireAuthenticated"
)]
pub async fn create_review_endpoint(
    db: Data<DbConn>,
    principal: Option<ReqData<Principal>>,
    req: Json<ReviewCreateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match create_review(
                principal.into_inner(),
                path_param.restaurant_id,
                req.into_inner(),
                ReviewAdapter::init(&db),
                RestaurantAdapter::init(&db),
            )
            .await
            {
                Ok(review) => response_201(review),
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
