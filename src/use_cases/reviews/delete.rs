use db_adapters::{
    restaurant_adapter::RestaurantAdapter,
    review_adapter::{ReviewAdapter, ReviewMutation, ReviewQuery},
};
use uuid::Uuid;

use crate::{
    access_control::{ensure_can_mutate, owner_scope, Principal},
    error_500,
    reviews::{get::not_found, rating::refresh_average_rating},
    UseCaseError,
};

#[tracing::instrument(name = "Deleting a review", skip(review_adapter, restaurant_adapter))]
pub async fn delete_review<'a>(
    principal: Principal,
    review_id: Uuid,
    review_adapter: ReviewAdapter<'a>,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<(), UseCaseError> {
    let review = review_adapter
        .clone()
        .get_by_id(review_id)
        .await
        .map_err(error_500)?
        .ok_or(not_found(review_id))?;
    ensure_can_mutate(&principal, &review)?;

    if review_adapter
        .clone()
        .delete(review_id, owner_scope(&principal))
        .await
        .map_err(error_500)?
        == 0
    {
        return Err(not_found(review_id));
    }

    refresh_average_rating(review.restaurant_id, review_adapter, restaurant_adapter).await
}
