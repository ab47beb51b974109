use db_adapters::{
    user_adapter::{UserAdapter, UserOrder, UserQuery},
    Order,
};
use entities::user;

use crate::{
    error_500,
    pagination::{unsortable, ListQuery, Listed},
    UseCaseError,
};

pub async fn list_users<'a>(
    query: ListQuery,
    user_adapter: UserAdapter<'a>,
) -> Result<Listed<user::Model>, UseCaseError> {
    let params = query.page_params()?;
    let user_adapter = match query.sort_key() {
        None => user_adapter.order_by_created_at(Order::Desc),
        Some(("created_at", order)) => user_adapter.order_by_created_at(order),
        Some(("name", order)) => user_adapter.order_by_name(order),
        Some((field, _)) => return Err(unsortable(field)),
    };

    user_adapter
        .get_page(params)
        .await
        .map(|page| Listed::from_page(page, params))
        .map_err(error_500)
}
