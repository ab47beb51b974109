use std::{future::Future, io, path::PathBuf};

use common::settings::types::UploadSettings;
use db_adapters::restaurant_adapter::{RestaurantAdapter, RestaurantMutation};
use entities::restaurant;
use tracing::{event, Level};
use uuid::Uuid;

use crate::{
    access_control::{ensure_can_mutate, owner_scope, Principal},
    error_500,
    restaurants::get::{get_restaurant, not_found},
    UseCaseError,
};

/// Where uploaded photos end up. Paths are joined onto the upload directory.
pub trait PhotoStore {
    fn write(&self, path: PathBuf, bytes: Vec<u8>) -> impl Future<Output = io::Result<()>>;
    fn remove(&self, path: PathBuf) -> impl Future<Output = io::Result<()>>;
}

#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// File extension for an `image/*` mime type, e.g. `image/svg+xml` gives `svg`.
pub fn image_extension(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next()?.trim().to_lowercase();
    let subtype = essence.strip_prefix("image/")?;
    let subtype = subtype.split('+').next()?;
    let extension = match subtype {
        "" => None,
        "jpeg" | "pjpeg" => Some("jpg".to_string()),
        s if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.') => {
            Some(s.replace(['-', '.'], ""))
        }
        _ => None,
    };
    extension.filter(|ext| !ext.is_empty())
}

/// Authorizes, validates, writes the bytes to `store` and records the new file name.
///
/// Nothing is written when the caller may not modify the restaurant or the upload is rejected.
/// The written file is removed again when the restaurant is gone by the time the name is recorded.
#[tracing::instrument(name = "Uploading a restaurant photo", skip(upload, settings, store, restaurant_adapter), fields(bytes = upload.bytes.len()))]
pub async fn upload_photo<'a>(
    principal: Principal,
    restaurant_id: Uuid,
    upload: PhotoUpload,
    settings: &UploadSettings,
    store: &impl PhotoStore,
    restaurant_adapter: RestaurantAdapter<'a>,
) -> Result<restaurant::Model, UseCaseError> {
    let restaurant = get_restaurant(restaurant_id, restaurant_adapter.clone()).await?;
    ensure_can_mutate(&principal, &restaurant)?;

    if upload.bytes.is_empty() {
        return Err(UseCaseError::BadRequest("Please upload a file".to_string()));
    }
    let extension = upload
        .content_type
        .as_deref()
        .and_then(image_extension)
        .ok_or(UseCaseError::BadRequest(
            "Please upload an image file".to_string(),
        ))?;
    if upload.bytes.len() > settings.max_file_bytes {
        return Err(UseCaseError::BadRequest(format!(
            "Please upload an image less than {} bytes",
            settings.max_file_bytes
        )));
    }

    let file_name = format!("photo_{}.{}", restaurant.id, extension);
    let path = PathBuf::from(&settings.path).join(&file_name);
    store
        .write(path.clone(), upload.bytes)
        .await
        .map_err(error_500)?;

    match restaurant_adapter
        .update_photo(restaurant_id, owner_scope(&principal), file_name)
        .await
        .map_err(error_500)?
    {
        Some(restaurant) => Ok(restaurant),
        None => {
            if let Err(e) = store.remove(path).await {
                event!(target: "backend", Level::WARN, "Failed to remove an orphaned photo: {}", e);
            }
            Err(not_found(restaurant_id))
        }
    }
}
