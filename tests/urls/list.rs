use actix_web::{http, test};
use entities::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn lists_urls_of_a_user() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other_user = factory::user().insert(&db).await?;
    let short = factory::url(Some(user.id)).insert(&db).await?;
    factory::url(Some(other_user.id)).insert(&db).await?;
    factory::url(None).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/url/getuserurl/{}", user.id))
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], short.id.to_string());

    Ok(())
}

#[actix_web::test]
async fn other_users_urls_are_hidden() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let snoop = factory::user().insert(&db).await?;
    factory::url(Some(user.id)).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/url/getuserurl/{}", user.id))
        .insert_header(bearer(&codec, snoop.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn admin_sees_any_users_urls() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    factory::url(Some(user.id)).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/url/getuserurl/{}", user.id))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["count"], 1);

    Ok(())
}

#[actix_web::test]
async fn lists_all_urls_by_clicks() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let mut popular = factory::url(None);
    popular.clicks = sea_orm::Set(42);
    let popular = popular.insert(&db).await?;
    factory::url(Some(user.id)).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/v1/url?sort=-clicks")
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"][0]["id"], popular.id.to_string());

    Ok(())
}

#[actix_web::test]
async fn lists_all_urls_without_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::url(None).insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/v1/url").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["total"], 1);

    Ok(())
}
