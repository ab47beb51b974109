use actix_web::{http, test};
use entities::{sea_orm_active_enums::Role, user};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::json;

use crate::utils::{bearer, init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn admin_may_change_role() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}", user.id))
        .insert_header(bearer(&codec, admin.id))
        .set_json(json!({ "role": "publisher" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.role, Role::Publisher);
    assert_eq!(user_in_db.name, user.name);

    Ok(())
}

#[actix_web::test]
async fn role_change_applies_to_the_next_request() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/restaurants")
        .insert_header(bearer(&codec, user.id))
        .set_json(json!({ "name": "Promoted Place" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}", user.id))
        .insert_header(bearer(&codec, admin.id))
        .set_json(json!({ "role": "publisher" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/restaurants")
        .insert_header(bearer(&codec, user.id))
        .set_json(json!({ "name": "Promoted Place" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    Ok(())
}
