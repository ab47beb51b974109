use actix_web::{http, test};
use entities::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, DbErr};
use uuid::Uuid;

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", user.id))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["email"], user.email);

    Ok(())
}

#[actix_web::test]
async fn not_found() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let admin = factory::user().role(Role::Admin).insert(&db).await?;
    let id = Uuid::now_v7();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", id))
        .insert_header(bearer(&codec, admin.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    let body = read_json(res).await;
    assert_eq!(body["error"], format!("No user with the id of {}", id));

    Ok(())
}

#[actix_web::test]
async fn plain_user_is_forbidden() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", user.id))
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}
