use std::{fs, io, path::PathBuf};

use actix_web::{http, test};
use db_adapters::restaurant_adapter::RestaurantAdapter;
use entities::{restaurant, sea_orm_active_enums::Role};
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait};
use use_cases::{
    access_control::Principal,
    restaurants::photo::{upload_photo, PhotoStore, PhotoUpload},
    UseCaseError,
};
use uuid::Uuid;

use crate::utils::{bearer, init_app, read_json, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        codec,
        settings,
    } = init_app().await?;
    let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/restaurants/{}/photo", restaurant.id))
        .insert_header(bearer(&codec, publisher.id))
        .insert_header((http::header::CONTENT_TYPE, "image/jpeg"))
        .set_payload(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let file_name = format!("photo_{}.jpg", restaurant.id);
    let body = read_json(res).await;
    assert_eq!(body["data"]["photo"], file_name);

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(restaurant_in_db.photo, file_name);

    let stored = PathBuf::from(&settings.upload.path).join(&file_name);
    assert_eq!(
        std::fs::read(&stored).unwrap(),
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]
    );
    std::fs::remove_file(stored).unwrap();

    Ok(())
}

#[actix_web::test]
async fn non_owner_writes_nothing() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        codec,
        settings,
    } = init_app().await?;
    let owner = factory::user().role(Role::Publisher).insert(&db).await?;
    let intruder = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(owner.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/restaurants/{}/photo", restaurant.id))
        .insert_header(bearer(&codec, intruder.id))
        .insert_header((http::header::CONTENT_TYPE, "image/png"))
        .set_payload(vec![0x89, 0x50, 0x4E, 0x47])
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    let stored =
        PathBuf::from(&settings.upload.path).join(format!("photo_{}.png", restaurant.id));
    assert!(!stored.exists());

    let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(restaurant_in_db.photo, "no-photo.jpg");

    Ok(())
}

mod bad_request {
    use super::*;

    #[actix_web::test]
    async fn not_an_image() -> Result<(), DbErr> {
        let Connections { app, db, codec, .. } = init_app().await?;
        let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
        let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/restaurants/{}/photo", restaurant.id))
            .insert_header(bearer(&codec, publisher.id))
            .insert_header((http::header::CONTENT_TYPE, "text/plain"))
            .set_payload("hello")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body["error"], "Please upload an image file");

        Ok(())
    }

    #[actix_web::test]
    async fn too_large() -> Result<(), DbErr> {
        let Connections {
            app,
            db,
            codec,
            settings,
        } = init_app().await?;
        let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
        let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/restaurants/{}/photo", restaurant.id))
            .insert_header(bearer(&codec, publisher.id))
            .insert_header((http::header::CONTENT_TYPE, "image/png"))
            .set_payload(vec![0u8; settings.upload.max_file_bytes + 1])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let restaurant_in_db = restaurant::Entity::find_by_id(restaurant.id)
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(restaurant_in_db.photo, "no-photo.jpg");

        Ok(())
    }

    #[actix_web::test]
    async fn empty_upload() -> Result<(), DbErr> {
        let Connections { app, db, codec, .. } = init_app().await?;
        let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
        let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/restaurants/{}/photo", restaurant.id))
            .insert_header(bearer(&codec, publisher.id))
            .insert_header((http::header::CONTENT_TYPE, "image/png"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body["error"], "Please upload a file");

        Ok(())
    }
}

/// Writes to disk, but the restaurant is deleted before the file name is recorded.
struct DeletedWhileWriting<'a> {
    db: &'a DbConn,
    restaurant_id: Uuid,
}

impl PhotoStore for DeletedWhileWriting<'_> {
    async fn write(&self, path: PathBuf, bytes: Vec<u8>) -> io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, bytes)?;
        restaurant::Entity::delete_by_id(self.restaurant_id)
            .exec(self.db)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        Ok(())
    }

    async fn remove(&self, path: PathBuf) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[actix_web::test]
async fn restaurant_deleted_during_upload_leaves_no_file() -> Result<(), DbErr> {
    let Connections { db, settings, .. } = init_app().await?;
    let publisher = factory::user().role(Role::Publisher).insert(&db).await?;
    let restaurant = factory::restaurant(publisher.id).insert(&db).await?;

    let res = upload_photo(
        Principal::from(&publisher),
        restaurant.id,
        PhotoUpload {
            content_type: Some("image/gif".to_string()),
            bytes: vec![0x47, 0x49, 0x46, 0x38],
        },
        &settings.upload,
        &DeletedWhileWriting {
            db: &db,
            restaurant_id: restaurant.id,
        },
        RestaurantAdapter::init(&db),
    )
    .await;

    assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    let stored =
        PathBuf::from(&settings.upload.path).join(format!("photo_{}.gif", restaurant.id));
    assert!(!stored.exists());

    Ok(())
}
