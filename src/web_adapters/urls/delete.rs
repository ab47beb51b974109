use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::url_adapter::UrlAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, URL_ACCESS},
    urls::delete::delete_url,
    UseCaseError,
};

use crate::{
    utils::{response_200, response_401, response_404, response_500, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a url", skip(db))]
#[delete(
    "/{id}",
    wrap = "RequireRole::new(URL_ACCESS.delete)",
    wrap = "RequireAuthenticated"
)]
pub async fn delete_url_endpoint(
    db: Data<DbConn>,
    principal: Option<ReqData<Principal>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match delete_url(principal.into_inner(), path_param.id, UrlAdapter::init(&db)).await {
                Ok(()) => response_200(serde_json::json!({})),
                Err(e) => match &e {
                    UseCaseError::Unauthorized(message) => response_401(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
