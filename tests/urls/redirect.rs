use actix_web::{http, test};
use entities::url;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn redirects_and_counts_the_click() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let short = factory::url(None).url_id("abcDEF-_12").insert(&db).await?;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/abcDEF-_12").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), http::StatusCode::FOUND);
        assert_eq!(
            res.headers().get(http::header::LOCATION).unwrap(),
            short.orig_url.as_str()
        );
    }

    let url_in_db = url::Entity::find_by_id(short.id).one(&db).await?.unwrap();
    assert_eq!(url_in_db.clicks, 2);

    Ok(())
}

#[actix_web::test]
async fn unknown_id() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/zzzzzzzzzz").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn api_paths_are_not_short_ids() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/api/health-check").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    Ok(())
}
