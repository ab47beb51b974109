use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use common::geocoder::Geocoder;
use db_adapters::restaurant_adapter::RestaurantAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, RESTAURANT_ACCESS},
    restaurants::{types::RestaurantUpdateRequest, update::update_restaurant},
    UseCaseError,
};

use crate::{
    utils::{
        response_200, response_400, response_401, response_404, response_500, response_503,
        NOT_AUTHORIZED,
    },
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    restaurant_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a restaurant", skip(db, geocoder))]
#[put(
    "/{restaurant_id}",
    wrap = "RequireRole::new(RESTAURANT_ACCESS.update)",
    wrap = "RequireAuthenticated"
)]
pub async fn update_restaurant_endpoint(
    db: Data<DbConn>,
    geocoder: Data<Geocoder>,
    principal: Option<ReqData<Principal>>,
    req: Json<RestaurantUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match update_restaurant(
                principal.into_inner(),
                path_param.restaurant_id,
                req.into_inner(),
                geocoder.get_ref(),
                RestaurantAdapter::init(&db),
            )
            .await
            {
                Ok(restaurant) => response_200(restaurant),
                Err(e) => match &e {
                    UseCaseError::BadRequest(message) => response_400(message),
                    UseCaseError::Unauthorized(message) => response_401(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    UseCaseError::ServiceUnavailable(message) => response_503(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
