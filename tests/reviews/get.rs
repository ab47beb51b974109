use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, read_json, Connections};
use common::factory;

#[actix_web::test]
async fn includes_restaurant_summary() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let restaurant = factory::restaurant(user.id).insert(&db).await?;
    let review = factory::review(restaurant.id, user.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/reviews/{}", review.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["id"], review.id.to_string());
    assert_eq!(body["data"]["title"], review.title);
    assert_eq!(body["data"]["restaurant"]["name"], restaurant.name);

    Ok(())
}

#[actix_web::test]
async fn not_found() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/reviews/{}", uuid::Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
