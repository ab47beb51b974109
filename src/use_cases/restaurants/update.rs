use common::geocoder::GeocodeAddress;
use db_adapters::restaurant_adapter::{
    RestaurantAdapter, RestaurantMutation, UpdateRestaurantParams,
};
use entities::restaurant;
use uuid::Uuid;

use crate::{
    access_control::{ensure_can_mutate, owner_scope, Principal},
    db_error,
    restaurants::{
        get::{get_restaurant, not_found},
        location::{into_location_params, locate},
        types::{slugify, validate_name, Details, RestaurantUpdateRequest, DUPLICATE_NAME},
    },
    UseCaseError,
};

#[tracing::instrument(name = "Updating a restaurant", skip(geocoder, restaurant_adapter))]
pub async fn update_restaurant<'a, G: GeocodeAddress>(
    principal: Principal,
    restaurant_id: Uuid,
    params: RestaurantUpdateRequest,
    geocoder: &G,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<restaurant::Model, UseCaseError> {
    let name = params.name.as_deref().map(validate_name).transpose()?;
    let details = Details::validate(
        params.cuisine,
        params.about,
        params.website,
        params.phone,
        params.email,
    )?;

    let restaurant = get_restaurant(restaurant_id, restaurant_adapter.clone()).await?;
    ensure_can_mutate(&principal, &restaurant)?;

    let location = match params.address.as_deref().map(str::trim) {
        Some(address) if !address.is_empty() => {
            Some(into_location_params(locate(geocoder, address).await?))
        }
        _ => None,
    };

    restaurant_adapter
        .update(
            restaurant_id,
            owner_scope(&principal),
            UpdateRestaurantParams {
                slug: name.as_deref().map(slugify),
                name,
                cuisine: details.cuisine,
                about: details.about,
                website: details.website,
                phone: details.phone,
                email: details.email,
                location,
            },
        )
        .await
        .map_err(db_error(DUPLICATE_NAME))?
        .ok_or(not_found(restaurant_id))
}
