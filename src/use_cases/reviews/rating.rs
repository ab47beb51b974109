use db_adapters::{
    restaurant_adapter::{RestaurantAdapter, RestaurantMutation},
    review_adapter::{ReviewAdapter, ReviewFilter, ReviewQuery},
};
use uuid::Uuid;

use crate::{error_500, UseCaseError};

pub(crate) fn average(ratings: &[i32]) -> Option<f64> {
    match ratings.len() {
        0 => None,
        n => Some(ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / n as f64),
    }
}

/// Recomputes `average_rating` from every review of the restaurant.
pub(crate) async fn refresh_average_rating<'a>(
    restaurant_id: Uuid,
    review_adapter: ReviewAdapter<'a>,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<(), UseCaseError> {
    let ratings = review_adapter
        .filter_eq_restaurant_id(restaurant_id)
        .get_ratings()
        .await
        .map_err(error_500)?;
    restaurant_adapter
        .update_average_rating(restaurant_id, average(&ratings))
        .await
        .map_err(error_500)
}
