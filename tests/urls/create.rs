use actix_web::{http, test};
use entities::url;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory;

#[actix_web::test]
async fn anonymous_happy_path() -> Result<(), DbErr> {
    let Connections { app, db, settings, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/url/newurl")
        .set_json(json!({ "origUrl": "https://docs.rs/actix-web" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let body = read_json(res).await;
    let url_id = body["data"]["url_id"].as_str().unwrap().to_string();
    assert_eq!(url_id.len(), 10);
    assert_eq!(
        body["data"]["short_url"],
        format!("{}/{}", settings.application.base_url, url_id)
    );

    let url_in_db = url::Entity::find().one(&db).await?.unwrap();
    assert_eq!(url_in_db.url_id, url_id);
    assert_eq!(url_in_db.orig_url, "https://docs.rs/actix-web");
    assert_eq!(url_in_db.user_id, None);
    assert_eq!(url_in_db.clicks, 0);

    Ok(())
}

#[actix_web::test]
async fn owner_gets_existing_url_back() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let mut url_ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/url/newuserurl")
            .insert_header(bearer(&codec, user.id))
            .set_json(json!({ "orig_url": "https://crates.io" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CREATED);
        let body = read_json(res).await;
        assert_eq!(body["data"]["user_id"], user.id.to_string());
        url_ids.push(body["data"]["url_id"].clone());
    }

    assert_eq!(url_ids[0], url_ids[1]);
    let count = url::Entity::find().count(&db).await?;
    assert_eq!(count, 1);

    Ok(())
}

#[actix_web::test]
async fn anonymous_urls_are_never_shared() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let mut url_ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/url/newurl")
            .set_json(json!({ "orig_url": "https://crates.io" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CREATED);
        let body = read_json(res).await;
        url_ids.push(body["data"]["url_id"].clone());
    }

    assert_ne!(url_ids[0], url_ids[1]);
    let count = url::Entity::find().count(&db).await?;
    assert_eq!(count, 2);

    Ok(())
}

#[actix_web::test]
async fn user_url_requires_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/url/newuserurl")
        .set_json(json!({ "orig_url": "https://crates.io" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let count = url::Entity::find().count(&db).await?;
    assert_eq!(count, 0);

    Ok(())
}

#[actix_web::test]
async fn invalid_original_url() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/url/newurl")
        .set_json(json!({ "origUrl": "javascript:alert(1)" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Invalid original url");

    Ok(())
}
