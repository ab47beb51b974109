use actix_web::{
    dev::Server,
    middleware::{Compress, Logger},
    web::Data,
    App, HttpServer,
};
use common::{
    db::init_db, geocoder::Geocoder, settings::types::Settings, token::PasetoCodec,
};
use sea_orm::DatabaseConnection;
use server::{get_routes, short_url_routes};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = init_db(&settings)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, settings).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(
    listener: std::net::TcpListener,
    db: DatabaseConnection,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let codec = Data::new(
        PasetoCodec::new(&settings.secret)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
    );
    let geocoder = Data::new(Geocoder::new(&settings.geocoder));
    let db = Data::new(db);
    let settings = Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(get_routes())
            .configure(short_url_routes)
            .app_data(db.clone())
            .app_data(codec.clone())
            .app_data(geocoder.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
