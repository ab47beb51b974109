use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use serde_json::json;

use crate::utils::{init_app, read_json, Connections};
use common::{
    factory::{self, *},
    token::TokenCodec,
};
use use_cases::auth::password;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let hashed_password = password::hash(b"correct-horse").unwrap();
    let user = factory::user()
        .password(&hashed_password)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": user.email, "password": "correct-horse" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body = read_json(res).await;
    let claims = codec.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.subject, user.id);

    Ok(())
}

#[actix_web::test]
async fn wrong_password_and_unknown_email_look_the_same() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let hashed_password = password::hash(b"correct-horse").unwrap();
    let user = factory::user()
        .password(&hashed_password)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": user.email, "password": "battery-staple" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let wrong_password = read_json(res).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "battery-staple" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let unknown_email = read_json(res).await;

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "Invalid credentials");

    Ok(())
}

#[actix_web::test]
async fn missing_credentials() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "someone@example.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Please provide an email and password");

    Ok(())
}
