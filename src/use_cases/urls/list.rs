use db_adapters::{
    url_adapter::{UrlAdapter, UrlFilter, UrlOrder, UrlQuery},
    Order,
};
use entities::url;
use uuid::Uuid;

use crate::{
    access_control::Principal,
    error_500,
    pagination::{unsortable, ListQuery, Listed},
    UseCaseError,
};

pub async fn list_urls<'a>(
    query: ListQuery,
    url_adapter: UrlAdapter<'a>,
) -> Result<Listed<url::Model>, UseCaseError> {
    let params = query.page_params()?;
    let url_adapter = match query.sort_key() {
        None => url_adapter.order_by_created_at(Order::Desc),
        Some(("created_at" | "createdAt", order)) => url_adapter.order_by_created_at(order),
        Some(("clicks", order)) => url_adapter.order_by_clicks(order),
        Some((field, _)) => return Err(unsortable(field)),
    };

    url_adapter
        .get_page(params)
        .await
        .map(|page| Listed::from_page(page, params))
        .map_err(error_500)
}

/// Urls owned by `user_id`. Only that user or an admin may look.
pub async fn list_user_urls<'a>(
    principal: Principal,
    user_id: Uuid,
    url_adapter: UrlAdapter<'a>,
) -> Result<Vec<url::Model>, UseCaseError> {
    if principal.id != user_id && !principal.role.is_elevated() {
        return Err(UseCaseError::Unauthorized(format!(
            "User {} is not authorized to view urls of user {}",
            principal.id, user_id
        )));
    }

    url_adapter
        .filter_eq_user_id(user_id)
        .order_by_created_at(Order::Desc)
        .get_all()
        .await
        .map_err(error_500)
}
