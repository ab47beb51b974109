use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    // The test geocoder places every postal code in downtown Boston.
    let cambridge = factory::restaurant(user.id)
        .name("Cambridge Cafe")
        .located_at(42.3736, -71.1097)
        .insert(&db)
        .await?;
    factory::restaurant(user.id)
        .name("Manhattan Deli")
        .located_at(40.7128, -74.0060)
        .insert(&db)
        .await?;
    factory::restaurant(user.id)
        .name("Nowhere Noodles")
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants/radius/02108/10")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], cambridge.id.to_string());

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants/radius/02108/250")
        .to_request();
    let res = test::call_service(&app, req).await;

    let body = read_json(res).await;
    assert_eq!(body["count"], 2);

    Ok(())
}

#[actix_web::test]
async fn negative_distance() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/v1/restaurants/radius/02108/-5")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
