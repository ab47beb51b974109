use db_adapters::url_adapter::{CreateUrlParams, UrlAdapter, UrlFilter, UrlMutation, UrlQuery};
use entities::url;
use tracing::{event, Level};

use crate::{
    access_control::Principal,
    error_500, is_duplicate,
    urls::{short_id::generate_url_id, types::UrlCreateRequest},
    validation::is_http_url,
    UseCaseError,
};

const ID_ATTEMPTS: usize = 3;

pub fn short_url(base_url: &str, url_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), url_id)
}

/// Shortens `orig_url` for `owner`, or anonymously. An owner shortening the same url twice
/// gets the existing record back; anonymous calls always get a fresh record.
#[tracing::instrument(name = "Shortening a url", skip(base_url, url_adapter))]
pub async fn create_url<'a>(
    owner: Option<Principal>,
    params: UrlCreateRequest,
    base_url: &str,
    url_adapter: UrlAdapter<'a>,
) -> Result<url::Model, UseCaseError> {
    let orig_url = params.orig_url.trim().to_string();
    if !is_http_url(&orig_url) {
        return Err(UseCaseError::BadRequest("Invalid original url".to_string()));
    }

    if let Some(owner) = owner {
        let existing = url_adapter
            .clone()
            .filter_eq_user_id(owner.id)
            .filter_eq_orig_url(&orig_url)
            .get_one()
            .await
            .map_err(error_500)?;
        if let Some(existing) = existing {
            return Ok(existing);
        }
    }

    for _ in 0..ID_ATTEMPTS {
        let url_id = generate_url_id();
        match url_adapter
            .clone()
            .create(CreateUrlParams {
                short_url: short_url(base_url, &url_id),
                url_id,
                orig_url: orig_url.clone(),
                user_id: owner.map(|owner| owner.id),
            })
            .await
        {
            Ok(url) => return Ok(url),
            Err(e) if is_duplicate(&e) => {
                event!(target: "backend", Level::WARN, "Short url id collided, retrying.");
            }
            Err(e) => return Err(error_500(e)),
        }
    }
    Err(UseCaseError::InternalServerError(
        "Could not allocate a unique short url id".to_string(),
    ))
}
