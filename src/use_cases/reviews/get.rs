use db_adapters::review_adapter::{ReviewAdapter, ReviewQuery};
use uuid::Uuid;

use crate::{error_500, reviews::types::ReviewWithRestaurant, UseCaseError};

pub(crate) fn not_found(review_id: Uuid) -> UseCaseError {
    UseCaseError::NotFound(format!("No review with the id of {}", review_id))
}

pub async fn get_review<'a>(
    review_id: Uuid,
    review_adapter: ReviewAdapter<'a>,
) -> Result<ReviewWithRestaurant, UseCaseError> {
    review_adapter
        .get_with_restaurant(review_id)
        .await
        .map_err(error_500)?
        .map(ReviewWithRestaurant::from)
        .ok_or(not_found(review_id))
}
