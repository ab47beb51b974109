use db_adapters::{
    restaurant_adapter::RestaurantAdapter,
    review_adapter::{CreateReviewParams, ReviewAdapter, ReviewFilter, ReviewMutation, ReviewQuery},
};
use entities::review;
use uuid::Uuid;

use crate::{
    access_control::Principal,
    db_error, error_500,
    restaurants::get::get_restaurant,
    reviews::{
        rating::refresh_average_rating,
        types::{
            validate_rating, validate_text, validate_title, ReviewCreateRequest, ALREADY_REVIEWED,
        },
    },
    UseCaseError,
};

#[tracing::instrument(name = "Creating a review", skip(review_adapter, restaurant_adapter))]
pub async fn create_review<'a>(
    principal: Principal,
    restaurant_id: Uuid,
    params: ReviewCreateRequest,
    review_adapter: ReviewAdapter<'a>,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<review::Model, UseCaseError> {
    let title = validate_title(&params.title)?;
    let text = validate_text(&params.text)?;
    let rating = validate_rating(params.rating)?;

    get_restaurant(restaurant_id, restaurant_adapter.clone()).await?;

    if review_adapter
        .clone()
        .filter_eq_restaurant_id(restaurant_id)
        .filter_eq_user_id(principal.id)
        .get_one()
        .await
        .map_err(error_500)?
        .is_some()
    {
        return Err(UseCaseError::BadRequest(ALREADY_REVIEWED.to_string()));
    }

    let review = review_adapter
        .clone()
        .create(CreateReviewParams {
            restaurant_id,
            user_id: principal.id,
            title,
            text,
            rating,
        })
        .await
        .map_err(db_error(ALREADY_REVIEWED))?;

    refresh_average_rating(restaurant_id, review_adapter, restaurant_adapter).await?;
    Ok(review)
}
