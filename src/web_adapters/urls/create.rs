use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::url_adapter::UrlAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::{Principal, URL_ACCESS},
    urls::{create::create_url, types::UrlCreateRequest},
    UseCaseError,
};

use crate::{
    utils::{response_201, response_400, response_401, response_500, NOT_AUTHORIZED},
    RequireAuthenticated, RequireRole,
};

fn into_response(result: Result<entities::url::Model, UseCaseError>) -> HttpResponse {
    match result {
        Ok(url) => response_201(url),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}

#[tracing::instrument(name = "Shortening a url anonymously", skip(db, settings))]
#[post("/newurl")]
pub async fn create_url_endpoint(
    db: Data<DbConn>,
    settings: Data<Settings>,
    req: Json<UrlCreateRequest>,
) -> HttpResponse {
    into_response(
        create_url(
            None,
            req.into_inner(),
            &settings.application.base_url,
            UrlAdapter::init(&db),
        )
        .await,
    )
}

#[tracing::instrument(name = "Shortening a url for a user", skip(db, settings))]
#[post(
    "/newuserurl",
    wrap = "RequireRole::new(URL_ACCESS.create)",
    wrap = "RequireAuthenticated"
)]
pub async fn create_user_url_endpoint(
    db: Data<DbConn>,
    settings: Data<Settings>,
    principal: Option<ReqData<Principal>>,
    req: Json<UrlCreateRequest>,
) -> HttpResponse {
    match principal {
        Some(principal) => into_response(
            create_url(
                Some(principal.into_inner()),
                req.into_inner(),
                &settings.application.base_url,
                UrlAdapter::init(&db),
            )
            .await,
        ),
        None => response_401(NOT_AUTHORIZED),
    }
}
