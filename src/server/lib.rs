use actix_web::{
    web::{scope, ServiceConfig},
    Scope,
};
use web_adapters::{
    auth_routes, json_config, redirect_short_url_endpoint, restaurant_routes, review_routes,
    url_routes, user_routes,
};

pub fn get_routes() -> Scope {
    scope("/api").service(health_check).service(
        scope("/v1")
            .app_data(json_config())
            .configure(auth_routes)
            .configure(user_routes)
            .configure(restaurant_routes)
            .configure(review_routes)
            .configure(url_routes),
    )
}

/// `GET /{url_id}`. Register after [`get_routes`] so `/api` wins.
pub fn short_url_routes(cfg: &mut ServiceConfig) {
    cfg.service(redirect_short_url_endpoint);
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
