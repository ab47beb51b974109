use actix_web::{http, test};
use entities::{sea_orm_active_enums::Role, user};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{bearer, init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", user.id))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?;
    assert!(user_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn not_found() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", uuid::Uuid::now_v7()))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
