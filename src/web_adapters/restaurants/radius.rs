use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use common::geocoder::Geocoder;
use db_adapters::restaurant_adapter::RestaurantAdapter;
use sea_orm::DbConn;
use use_cases::{restaurants::radius::get_restaurants_in_radius, UseCaseError};

use crate::utils::{response_400, response_500, response_503};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    postal_code: String,
    /// Miles.
    distance: f64,
}

#[derive(serde::Serialize)]
struct RadiusResponse<T> {
    success: bool,
    count: usize,
    data: Vec<T>,
}

#[tracing::instrument(name = "Finding restaurants in a radius", skip(db, geocoder))]
#[get("/radius/{postal_code}/{distance}")]
pub async fn get_restaurants_in_radius_endpoint(
    db: Data<DbConn>,
    geocoder: Data<Geocoder>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let PathParam {
        postal_code,
        distance,
    } = path_param.into_inner();
    match get_restaurants_in_radius(
        postal_code,
        distance,
        geocoder.get_ref(),
        RestaurantAdapter::init(&db),
    )
    .await
    {
        Ok(restaurants) => HttpResponse::Ok().json(RadiusResponse {
            success: true,
            count: restaurants.len(),
            data: restaurants,
        }),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::ServiceUnavailable(message) => response_503(message),
            _ => response_500(e),
        },
    }
}
