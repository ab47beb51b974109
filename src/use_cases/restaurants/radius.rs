use common::geocoder::GeocodeAddress;
use db_adapters::restaurant_adapter::{RestaurantAdapter, RestaurantFilter, RestaurantQuery};
use entities::restaurant;

use crate::{
    error_500,
    restaurants::location::{bounding_box, haversine_miles, locate},
    UseCaseError,
};

/// Restaurants within `miles` of the geocoded `postal_code`. Unlocated restaurants never match.
#[tracing::instrument(name = "Finding restaurants in a radius", skip(geocoder, restaurant_adapter))]
pub async fn get_restaurants_in_radius<'a, G: GeocodeAddress>(
    postal_code: String,
    miles: f64,
    geocoder: &G,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<Vec<restaurant::Model>, UseCaseError> {
    if !miles.is_finite() || miles < 0.0 {
        return Err(UseCaseError::BadRequest(
            "distance must be a non-negative number of miles".to_string(),
        ));
    }
    let center = locate(geocoder, &postal_code).await?;
    let center = (center.latitude, center.longitude);

    let candidates = restaurant_adapter
        .filter_within(bounding_box(center, miles))
        .get_all()
        .await
        .map_err(error_500)?;

    Ok(candidates
        .into_iter()
        .filter(|restaurant| match (restaurant.latitude, restaurant.longitude) {
            (Some(lat), Some(lng)) => haversine_miles(center, (lat, lng)) <= miles,
            _ => false,
        })
        .collect())
}
