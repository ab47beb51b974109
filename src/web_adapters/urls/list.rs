use actix_web::{
    get,
    web::{Data, Path, Query, ReqData},
    HttpResponse,
};
use db_adapters::url_adapter::UrlAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, URL_ACCESS},
    pagination::ListQuery,
    urls::list::{list_urls, list_user_urls},
    UseCaseError,
};

use crate::{
    utils::{response_400, response_401, response_500, response_list, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[derive(serde::Serialize)]
struct UserUrlsResponse<T> {
    success: bool,
    count: usize,
    data: Vec<T>,
}

#[tracing::instrument(name = "Listing urls", skip(db))]
#[get("")]
pub async fn list_urls_endpoint(db: Data<DbConn>, query: Query<ListQuery>) -> HttpResponse {
    match list_urls(query.into_inner(), UrlAdapter::init(&db)).await {
        Ok(listed) => response_list(listed),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}

#[tracing::instrument(name = "Listing a user's urls", skip(db))]
#[get(
    "/getuserurl/{user_id}",
    wrap = "RequireRole::new(URL_ACCESS.read)",
    wrap = "RequireAuthenticated"
)]
pub async fn list_user_urls_endpoint(
    db: Data<DbConn>,
    principal: Option<ReqData<Principal>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match principal {
        Some(principal) => {
            match list_user_urls(principal.into_inner(), path_param.user_id, UrlAdapter::init(&db))
                .await
            {
                Ok(urls) => HttpResponse::Ok().json(UserUrlsResponse {
                    success: true,
                    count: urls.len(),
                    data: urls,
                }),
                Err(e) => match &e {
                    UseCaseError::Unauthorized(message) => response_401(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(NOT_AUTHORIZED),
    }
}
