use actix_web::{
    get,
    web::{Data, Path, Query},
    HttpResponse,
};
use db_adapters::{restaurant_adapter::RestaurantAdapter, review_adapter::ReviewAdapter};
use sea_orm::DbConn;
use use_cases::{
    pagination::ListQuery,
    reviews::list::{list_restaurant_reviews, list_reviews},
    UseCaseError,
};

use crate::utils::{response_400, response_404, response_500, response_list};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    restaurant_id: uuid::Uuid,
}

#[tracing::instrument(name = "Listing reviews", skip(db))]
#[get("")]
pub async fn list_reviews_endpoint(db: Data<DbConn>, query: Query<ListQuery>) -> HttpResponse {
    match list_reviews(query.into_inner(), ReviewAdapter::init(&db)).await {
        Ok(listed) => response_list(listed),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}

#[tracing::instrument(name = "Listing a restaurant's reviews", skip(db))]
#[get("/{restaurant_id}/reviews")]
pub async fn list_restaurant_reviews_endpoint(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
    query: Query<ListQuery>,
) -> HttpResponse {
    match list_restaurant_reviews(
        path_param.restaurant_id,
        query.into_inner(),
        ReviewAdapter::init(&db),
        RestaurantAdapter::init(&db),
    )
    .await
    {
        Ok(listed) => response_list(listed),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
