use actix_web::{http, test};
use entities::url;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{bearer, init_app, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let short = factory::url(Some(user.id)).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/url/{}", short.id))
        .insert_header(bearer(&codec, user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    let url_in_db = url::Entity::find_by_id(short.id).one(&db).await?;
    assert!(url_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn non_owner_cannot_delete() -> Result<(), DbErr> {
    let Connections { app, db, codec, .. } = init_app().await?;
    let owner = factory::user().insert(&db).await?;
    let intruder = factory::user().insert(&db).await?;
    let short = factory::url(Some(owner.id)).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/url/{}", short.id))
        .insert_header(bearer(&codec, intruder.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    let url_in_db = url::Entity::find_by_id(short.id).one(&db).await?;
    assert!(url_in_db.is_some());

    Ok(())
}
