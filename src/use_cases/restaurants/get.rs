use db_adapters::restaurant_adapter::{RestaurantAdapter, RestaurantQuery};
use entities::restaurant;
use uuid::Uuid;

use crate::{error_500, UseCaseError};

pub(crate) fn not_found(restaurant_id: Uuid) -> UseCaseError {
    UseCaseError::NotFound(format!("No restaurant with the id of {}", restaurant_id))
}

pub async fn get_restaurant<'a>(
    restaurant_id: Uuid,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<restaurant::Model, UseCaseError> {
    restaurant_adapter
        .get_by_id(restaurant_id)
        .await
        .map_err(error_500)?
        .ok_or(not_found(restaurant_id))
}
