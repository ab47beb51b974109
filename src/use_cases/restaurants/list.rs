use db_adapters::{
    restaurant_adapter::{RestaurantAdapter, RestaurantOrder, RestaurantQuery},
    Order,
};
use entities::restaurant;

use crate::{
    error_500,
    pagination::{unsortable, ListQuery, Listed},
    UseCaseError,
};

pub async fn list_restaurants<'a>(
    query: ListQuery,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<Listed<restaurant::Model>, UseCaseError> {
    let params = query.page_params()?;
    let restaurant_adapter = match query.sort_key() {
        None => restaurant_adapter.order_by_created_at(Order::Desc),
        Some(("created_at" | "createdAt", order)) => restaurant_adapter.order_by_created_at(order),
        Some(("name", order)) => restaurant_adapter.order_by_name(order),
        Some(("average_rating" | "averageRating", order)) => {
            restaurant_adapter.order_by_average_rating(order)
        }
        Some((field, _)) => return Err(unsortable(field)),
    };

    restaurant_adapter
        .get_page(params)
        .await
        .map(|page| Listed::from_page(page, params))
        .map_err(error_500)
}
