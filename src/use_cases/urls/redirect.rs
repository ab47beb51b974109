use db_adapters::url_adapter::{UrlAdapter, UrlMutation, UrlQuery};

use crate::{
    error_500,
    urls::{get::not_found, short_id::is_url_id},
    UseCaseError,
};

/// Counts a visit and returns the original url.
pub async fn resolve_short_url<'a>(
    url_id: &str,
    url_adapter: UrlAdapter<'a>,
) -> Result<String, UseCaseError> {
    if !is_url_id(url_id) {
        return Err(not_found(url_id));
    }
    let url = url_adapter
        .clone()
        .get_by_url_id(url_id)
        .await
        .map_err(error_500)?
        .ok_or(not_found(url_id))?;

    url_adapter
        .increment_clicks(url.id)
        .await
        .map_err(error_500)?;
    Ok(url.orig_url)
}
