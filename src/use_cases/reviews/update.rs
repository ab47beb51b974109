use db_adapters::{
    restaurant_adapter::RestaurantAdapter,
    review_adapter::{ReviewAdapter, ReviewMutation, ReviewQuery, UpdateReviewParams},
};
use entities::review;
use uuid::Uuid;

use crate::{
    access_control::{ensure_can_mutate, owner_scope, Principal},
    error_500,
    reviews::{
        get::not_found,
        rating::refresh_average_rating,
        types::{validate_rating, validate_text, validate_title, ReviewUpdateRequest},
    },
    UseCaseError,
};

#[tracing::instrument(name = "Updating a review", skip(review_adapter, restaurant_adapter))]
pub async fn update_review<'a>(
    principal: Principal,
    review_id: Uuid,
    params: ReviewUpdateRequest,
    review_adapter: ReviewAdapter<'a>,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<review::Model, UseCaseError> {
    let title = params.title.as_deref().map(validate_title).transpose()?;
    let text = params.text.as_deref().map(validate_text).transpose()?;
    let rating = params.rating.map(validate_rating).transpose()?;

    let review = review_adapter
        .clone()
        .get_by_id(review_id)
        .await
        .map_err(error_500)?
        .ok_or(not_found(review_id))?;
    ensure_can_mutate(&principal, &review)?;

    let review = review_adapter
        .clone()
        .update(
            review_id,
            owner_scope(&principal),
            UpdateReviewParams {
                title,
                text,
                rating,
            },
        )
        .await
        .map_err(error_500)?
        .ok_or(not_found(review_id))?;

    if rating.is_some() {
        refresh_average_rating(review.restaurant_id, review_adapter, restaurant_adapter).await?;
    }
    Ok(review)
}
