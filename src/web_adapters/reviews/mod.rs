mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub(crate) use create::create_review_endpoint;
pub(crate) use list::list_restaurant_reviews_endpoint;

pub fn review_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/reviews")
            .service(list::list_reviews_endpoint)
            .service(get::get_review_endpoint)
            .service(update::update_review_endpoint)
            .service(delete::delete_review_endpoint),
    );
}
