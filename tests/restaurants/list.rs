use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn paginates_and_sorts() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    for name in ["Charlie", "Alpha", "Bravo"] {
        factory::restaurant(user.id).name(name).insert(&db).await?;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants?sort=name&page=1&limit=2")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0]["name"], "Alpha");
    assert_eq!(body["data"][1]["name"], "Bravo");
    assert_eq!(body["pagination"]["next"]["page"], 2);
    assert!(body["pagination"].get("prev").is_none());

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants?sort=-name&page=2&limit=2")
        .to_request();
    let res = test::call_service(&app, req).await;

    let body = read_json(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Alpha");
    assert_eq!(body["pagination"]["prev"]["page"], 1);
    assert!(body["pagination"].get("next").is_none());

    Ok(())
}

#[actix_web::test]
async fn unknown_sort_field() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants?sort=password")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Cannot sort by password");

    Ok(())
}

#[actix_web::test]
async fn oversized_limit() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants?page=3&limit=9223372036854775807")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "limit must be at most 100");

    Ok(())
}

#[actix_web::test]
async fn page_beyond_offset_range() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants?page=9223372036854775807&limit=100")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
