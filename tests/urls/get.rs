use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let short = factory::url(Some(user.id)).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/url/{}", short.id))
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["url_id"], short.url_id);

    Ok(())
}

#[actix_web::test]
async fn needs_no_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let short = factory::url(None).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/url/{}", short.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["orig_url"], short.orig_url);

    Ok(())
}
