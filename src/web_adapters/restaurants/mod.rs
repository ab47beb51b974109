mod create;
mod delete;
mod get;
mod list;
mod photo;
mod radius;
mod update;

use actix_web::web::{scope, ServiceConfig};

use crate::reviews::{create_review_endpoint, list_restaurant_reviews_endpoint};

pub fn restaurant_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/restaurants")
            .service(list::list_restaurants_endpoint)
            .service(radius::get_restaurants_in_radius_endpoint)
            .service(get::get_restaurant_endpoint)
            .service(create::create_restaurant_endpoint)
            .service(update::update_restaurant_endpoint)
            .service(delete::delete_restaurant_endpoint)
            .service(photo::upload_photo_endpoint)
            .service(list_restaurant_reviews_endpoint)
            .service(create_review_endpoint),
    );
}
