use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use common::geocoder::Geocoder;
use db_adapters::restaurant_adapter::RestaurantAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, RESTAURANT_ACCESS},
    restaurants::{create::create_restaurant, types::RestaurantCreateRequest},
    UseCaseError,
};

use crate::{
    utils::{response_201, response_400, response_401, response_500, response_503, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

#[tracing::instrument(name = "Creating a restaurant", skip(db, geocoder))]
#[post(
    "",
    wrap = "RequireRole::new(RESTAURANT_ACCESS.create)",
    wrap = "RequireAuthenticated"
)]
pub async fn create_restaurant_endpoint(
    db: Data<DbConn>,
    geocoder: Data<Geocoder>,
    principal: Option<ReqData<Principal>>,
    req: Json<RestaurantCreateRequest>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match create_restaurant(
                principal.into_inner(),
                req.into_inner(),
                geocoder.get_ref(),
                RestaurantAdapter::init(&db),
            )
            .await
            {
                Ok(restaurant) => response_201(restaurant),
                Err(e) => match &e {
                    UseCaseError::BadRequest(message) => response_400(message),
                    UseCaseError::ServiceUnavailable(message) => response_503(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
