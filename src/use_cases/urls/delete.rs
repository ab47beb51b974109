use db_adapters::url_adapter::{UrlAdapter, UrlMutation};
use uuid::Uuid;

use crate::{
    access_control::{ensure_can_mutate, owner_scope, Principal},
    error_500,
    urls::get::{get_url, not_found},
    UseCaseError,
};

#[tracing::instrument(name = "Deleting a url", skip(url_adapter))]
pub async fn delete_url<'a>(
    principal: Principal,
    id: Uuid,
    url_adapter: UrlAdapter<'a>,
) -> Result<(), UseCaseError> {
    let url = get_url(id, url_adapter.clone()).await?;
    ensure_can_mutate(&principal, &url)?;

    match url_adapter
        .delete(id, owner_scope(&principal))
        .await
        .map_err(error_500)?
    {
        0 => Err(not_found(id)),
        _ => Ok(()),
    }
}
