use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::review_adapter::ReviewAdapter;
use sea_orm::DbConn;
use use_cases::{reviews::get::get_review, UseCaseError};

use crate::utils::{response_200, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    review_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a review", skip(db))]
#[get("/{review_id}")]
pub async fn get_review_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_review(path_param.review_id, ReviewAdapter::init(&db)).await {
        Ok(review) => response_200(review),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
