use db_adapters::{
    restaurant_adapter::RestaurantAdapter,
    review_adapter::{ReviewAdapter, ReviewFilter, ReviewOrder, ReviewQuery},
    Order,
};
use entities::review;
use uuid::Uuid;

use crate::{
    error_500,
    pagination::{unsortable, ListQuery, Listed},
    restaurants::get::get_restaurant,
    UseCaseError,
};

fn sorted<'a>(query: &ListQuery, review_adapter: ReviewAdapter<'a>) -> Result<ReviewAdapter<'a>, UseCaseError> {
    match query.sort_key() {
        None => Ok(review_adapter.order_by_created_at(Order::Desc)),
        Some(("created_at" | "createdAt", order)) => Ok(review_adapter.order_by_created_at(order)),
        Some(("rating", order)) => Ok(review_adapter.order_by_rating(order)),
        Some((field, _)) => Err(unsortable(field)),
    }
}

pub async fn list_reviews<'a>(
    query: ListQuery,
    review_adapter: ReviewAdapter<'a>,
) -> Result<Listed<review::Model>, UseCaseError> {
    let params = query.page_params()?;
    sorted(&query, review_adapter)?
        .get_page(params)
        .await
        .map(|page| Listed::from_page(page, params))
        .map_err(error_500)
}

pub async fn list_restaurant_reviews<'a>(
    restaurant_id: Uuid,
    query: ListQuery,
    review_adapter: ReviewAdapter<'a>,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<Listed<review::Model>, UseCaseError> {
    let params = query.page_params()?;
    get_restaurant(restaurant_id, restaurant_adapter).await?;

    sorted(&query, review_adapter.filter_eq_restaurant_id(restaurant_id))?
        .get_page(params)
        .await
        .map(|page| Listed::from_page(page, params))
        .map_err(error_500)
}
