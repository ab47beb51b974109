use db_adapters::restaurant_adapter::{RestaurantAdapter, RestaurantMutation};
use uuid::Uuid;

use crate::{
    access_control::{ensure_can_mutate, owner_scope, Principal},
    error_500,
    restaurants::get::{get_restaurant, not_found},
    UseCaseError,
};

/// Reviews of the restaurant go with it.
#[tracing::instrument(name = "Deleting a restaurant", skip(restaurant_adapter))]
pub async fn delete_restaurant<'a>(
    principal: Principal,
    restaurant_id: Uuid,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<(), UseCaseError> {
    let restaurant = get_restaurant(restaurant_id, restaurant_adapter.clone()).await?;
    ensure_can_mutate(&principal, &restaurant)?;

    match restaurant_adapter
        .delete(restaurant_id, owner_scope(&principal))
        .await
        .map_err(error_500)?
    {
        0 => Err(not_found(restaurant_id)),
        _ => Ok(()),
    }
}
