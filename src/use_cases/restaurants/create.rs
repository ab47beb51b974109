use common::geocoder::GeocodeAddress;
use db_adapters::restaurant_adapter::{
    CreateRestaurantParams, RestaurantAdapter, RestaurantFilter, RestaurantMutation,
    RestaurantQuery,
};
use entities::restaurant;

use crate::{
    access_control::Principal,
    db_error, error_500,
    restaurants::{
        location::{into_location_params, locate},
        types::{slugify, validate_name, Details, RestaurantCreateRequest, DUPLICATE_NAME},
    },
    UseCaseError,
};

#[tracing::instrument(name = "Creating a restaurant", skip(geocoder, restaurant_adapter))]
pub async fn create_restaurant<'a, G: GeocodeAddress>(
    principal: Principal,
    params: RestaurantCreateRequest,
    geocoder: &G,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<restaurant::Model, UseCaseError> {
    let name = validate_name(&params.name)?;
    let details = Details::validate(
        params.cuisine,
        params.about,
        params.website,
        params.phone,
        params.email,
    )?;

    if !principal.role.is_elevated()
        && restaurant_adapter
            .clone()
            .filter_eq_user_id(principal.id)
            .get_one()
            .await
            .map_err(error_500)?
            .is_some()
    {
        return Err(UseCaseError::BadRequest(format!(
            "The user with ID {} has already published a restaurant",
            principal.id
        )));
    }

    let location = match params.address.as_deref().map(str::trim) {
        Some(address) if !address.is_empty() => {
            Some(into_location_params(locate(geocoder, address).await?))
        }
        _ => None,
    };

    restaurant_adapter
        .create(CreateRestaurantParams {
            user_id: principal.id,
            slug: slugify(&name),
            name,
            cuisine: details.cuisine,
            about: details.about,
            website: details.website,
            phone: details.phone,
            email: details.email,
            location,
        })
        .await
        .map_err(db_error(DUPLICATE_NAME))
}
