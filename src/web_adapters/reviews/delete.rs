use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::{restaurant_adapter::RestaurantAdapter, review_adapter::ReviewAdapter};
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, REVIEW_ACCESS},
    reviews::delete::delete_review,
    UseCaseError,
};

use crate::{
    utils::{response_200, response_401, response_404, response_500, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    review_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a review", skip(db))]
#[delete(
    "/{review_id}",
    wrap = "RequireRole::new(REVIEW_ACCESS.delete)",
    wrap = "RequireAuthenticated"
)]
pub async fn delete_review_endpoint(
    db: Data<DbConn>,
    principal: Option<ReqData<Principal>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match delete_review(
                principal.into_inner(),
                path_param.review_id,
                ReviewAdapter::init(&db),
                RestaurantAdapter::init(&db),
            )
            .await
            {
                Ok(()) => response_200(serde_json::json!({})),
                Err(e) => match &e {
                    UseCaseError::Unauthorized(message) => response_401(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
