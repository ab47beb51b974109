use actix_web::{http, test};
use entities::{restaurant, sea_orm_active_enums::Role};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::json;

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/restaurants/{}", restaurant.id))
        .insert_header(bearer(&codec, publisher.id))
        .set_json(json!({ "name": "Fresh Start", "about": "New menu." }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["name"], "Fresh Start");

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(restaurant_in_db.name, "Fresh Start");
    assert_eq!(restaurant_in_db.slug, "fresh-start");
    assert_eq!(restaurant_in_db.about.as_deref(), Some("New menu."));
    assert_eq!(restaurant_in_db.cuisine, restaurant.cuisine);

    Ok(())
}

#[actix_web::test]
async fn admin_may_update_any_restaurant() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/restaurants/{}", restaurant.id))
        .insert_header(bearer(&codec, admin.id))
        .set_json(json!({ "cuisine": "Thai" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(restaurant_in_db.cuisine.as_deref(), Some("Thai"));
    assert_eq!(restaurant_in_db.user_id, publisher.id);

    Ok(())
}

#[actix_web::test]
async fn empty_update_returns_the_restaurant() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/restaurants/{}", restaurant.id))
        .insert_header(bearer(&codec, publisher.id))
        .set_json(json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["name"], restaurant.name);

    Ok(())
}
