use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::restaurant_adapter::RestaurantAdapter;
use sea_orm::DbConn;
use use_cases::{restaurants::get::get_restaurant, UseCaseError};

use crate::utils::{response_200, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    restaurant_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a restaurant", skip(db))]
#[get("/{restaurant_id}")]
pub async fn get_restaurant_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_restaurant(path_param.restaurant_id, RestaurantAdapter::init(&db)).await {
        Ok(restaurant) => response_200(restaurant),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
