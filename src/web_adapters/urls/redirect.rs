use actix_web::{
    get,
    http::header::LOCATION,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::url_adapter::UrlAdapter;
use sea_orm::DbConn;
use use_cases::{urls::redirect::resolve_short_url, UseCaseError};

use crate::utils::{response_404, response_500};

#[tracing::instrument(name = "Following a short url", skip(db))]
#[get("/{url_id}")]
pub async fn redirect_short_url_endpoint(db: Data<DbConn>, url_id: Path<String>) -> HttpResponse {
    match resolve_short_url(&url_id, UrlAdapter::init(&db)).await {
        Ok(orig_url) => HttpResponse::Found()
            .insert_header((LOCATION, orig_url))
            .finish(),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
