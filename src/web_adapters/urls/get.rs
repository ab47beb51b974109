use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::url_adapter::UrlAdapter;
use sea_orm::DbConn;
use use_cases::{urls::get::get_url, UseCaseError};

use crate::utils::{response_200, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a url", skip(db))]
#[get("/{id}")]
pub async fn get_url_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_url(path_param.id, UrlAdapter::init(&db)).await {
        Ok(url) => response_200(url),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
