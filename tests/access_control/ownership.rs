use actix_web::{http, test};
use entities::{restaurant, review, sea_orm_active_enums::Role, url};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::json;

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn non_owner_cannot_delete_restaurant() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let owner = factory::user().role(Role::Publisher).insert(&db).await?;
    let intruder = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(owner.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/restaurants/{}", restaurant.id))
        .insert_header(bearer(&codec, intruder.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let body = read_json(res).await;
    assert_eq!(
        body["error"],
        format!(
            "User {} is not authorized to modify restaurant {}",
            intruder.id, restaurant.id
        )
    );

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(restaurant_in_db.user_id, owner.id);

    Ok(())
}

#[actix_web::test]
async fn non_owner_cannot_update_restaurant() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let owner = factory::user().role(Role::Publisher).insert(&db).await?;
    let intruder = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(owner.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/restaurants/{}", restaurant.id))
        .insert_header(bearer(&codec, intruder.id))
        .set_json(json!({ "name": "Hijacked" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(restaurant_in_db.name, restaurant.name);

    Ok(())
}

#[actix_web::test]
async fn admin_may_delete_any_restaurant() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let owner = factory::user().insert(&db).await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let restaurant = factory::restaurant(owner.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/restaurants/{}", restaurant.id))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id).one(&db).await?;
    assert!(restaurant_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn missing_resource_is_not_found_before_ownership() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().role(Role::Publisher).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/restaurants/{}", uuid::Uuid::now_v7()))
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn non_owner_cannot_delete_review() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let owner = factory::user().insert(&db).await?;
    let author = factory::user().insert(&db).await?;
    let intruder = factory::user().insert(&db).await?;
    let restaurant = factory::restaurant(owner.id).insert(&db).await?;
    let review = factory::review(restaurant.id, author.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/reviews/{}", review.id))
        .insert_header(bearer(&codec, intruder.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    let review_in_db = review::Entity::find_by_id(review.id).one(&db).await?;
    assert!(review_in_db.is_some());

    Ok(())
}

#[actix_web::test]
async fn anonymous_url_can_only_be_deleted_by_admin() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let anonymous_url = factory::url(None).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/url/{}", anonymous_url.id))
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/url/{}", anonymous_url.id))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let url_in_db = url::Entity::find_by_id(anonymous_url.id).one(&db).await?;
    assert!(url_in_db.is_none());

    Ok(())
}
