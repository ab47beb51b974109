use db_adapters::url_adapter::{UrlAdapter, UrlQuery};
use entities::url;
use uuid::Uuid;

use crate::{error_500, UseCaseError};

pub(crate) fn not_found(url_id: impl std::fmt::Display) -> UseCaseError {
    UseCaseError::NotFound(format!("No url with the id of {}", url_id))
}

pub async fn get_url<'a>(id: Uuid, url_adapter: UrlAdapter<'a>) -> Result<url::Model, UseCaseError> {
    url_adapter
        .get_by_id(id)
        .await
        .map_err(error_500)?
        .ok_or(not_found(id))
}
