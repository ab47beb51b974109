use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::restaurant_adapter::RestaurantAdapter;
use sea_orm::DbConn;
use use_cases::{pagination::ListQuery, restaurants::list::list_restaurants, UseCaseError};

use crate::utils::{response_400, response_500, response_list};

#[tracing::instrument(name = "Listing restaurants", skip(db))]
#[get("")]
pub async fn list_restaurants_endpoint(db: Data<DbConn>, query: Query<ListQuery>) -> HttpResponse {
    match list_restaurants(query.into_inner(), RestaurantAdapter::init(&db)).await {
        Ok(listed) => response_list(listed),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
