use std::{fs, io, path::PathBuf};

use actix_web::{
    http::header::CONTENT_TYPE,
    put,
    web::{self, Data, Path, Payload, ReqData},
    HttpRequest, HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::restaurant_adapter::RestaurantAdapter;
use futures::StreamExt;
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, RESTAURANT_ACCESS},
    restaurants::photo::{upload_photo, PhotoStore, PhotoUpload},
    UseCaseError,
};

use crate::{
    utils::{
        response_200, response_400, response_401, response_404, response_500, NOT_AUTHORIZED,
    },
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    restaurant_id: uuid::Uuid,
}

/// Reads at most `limit + 1` bytes so oversized uploads are detected without buffering them.
async fn read_body(mut payload: Payload, limit: usize) -> Result<Vec<u8>, actix_web::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        let room = (limit + 1).saturating_sub(body.len());
        body.extend_from_slice(&chunk[..chunk.len().min(room)]);
        if body.len() > limit {
            break;
        }
    }
    Ok(body)
}

struct UploadDirectory;

impl PhotoStore for UploadDirectory {
    async fn write(&self, path: PathBuf, bytes: Vec<u8>) -> io::Result<()> {
        web::block(move || {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, bytes)
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
    }

    async fn remove(&self, path: PathBuf) -> io::Result<()> {
        web::block(move || fs::remove_file(path))
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
    }
}

#[tracing::instrument(name = "Uploading a restaurant photo", skip(db, settings, payload, req))]
#[put(
    "/{restaurant_id}/photo",
    wrap = "RequireRole::new(RESTAURANT_ACCESS.update)",
    wrap = "RequireAuthenticated"
)]
pub async fn upload_photo_endpoint(
    db: Data<DbConn>,
    settings: Data<Settings>,
    principal: Option<ReqData<Principal>>,
    path_param: Path<PathParam>,
    req: HttpRequest,
    payload: Payload,
) -> HttpResponse {
    let principal = match principal {
        Some(principal) => principal.into_inner(),
        None => return response_401(NOT_AUTHORIZED),
    };
    let bytes = match read_body(payload, settings.upload.max_file_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => return response_400(&e.to_string()),
    };
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match upload_photo(
        principal,
        path_param.restaurant_id,
        PhotoUpload {
            content_type,
            bytes,
        },
        &settings.upload,
        &UploadDirectory,
        RestaurantAdapter::init(&db),
    )
    .await
    {
        Ok(restaurant) => response_200(restaurant),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::Unauthorized(message) => response_401(message),
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
