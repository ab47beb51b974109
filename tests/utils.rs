use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::header::AUTHORIZATION,
    test,
    web::Data,
    App,
};
use common::{
    db::init_db,
    geocoder::Geocoder,
    settings::{get_test_settings, types::Settings},
    token::{PasetoCodec, TokenCodec},
};
use sea_orm::{DbConn, DbErr};
use serde_json::Value;
use uuid::Uuid;

pub struct Connections<S> {
    pub app: S,
    pub db: DbConn,
    pub codec: PasetoCodec,
    pub settings: Settings,
}

pub async fn init_app() -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    let settings = get_test_settings();
    let db = init_db(&settings).await?;
    let codec = PasetoCodec::new(&settings.secret).expect("test secret is 32 bytes");
    let app = test::init_service(
        App::new()
            .service(server::get_routes())
            .configure(server::short_url_routes)
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(
                PasetoCodec::new(&settings.secret).expect("test secret is 32 bytes"),
            ))
            .app_data(Data::new(Geocoder::new(&settings.geocoder)))
            .app_data(Data::new(settings.clone())),
    )
    .await;
    Ok(Connections {
        app,
        db,
        codec,
        settings,
    })
}

pub fn bearer(codec: &PasetoCodec, user_id: Uuid) -> (actix_web::http::header::HeaderName, String) {
    let token = codec.issue(user_id).expect("token is issued");
    (AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn read_json(res: ServiceResponse) -> Value {
    test::read_body_json(res).await
}
