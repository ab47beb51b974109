mod create;
mod delete;
mod get;
mod list;
mod redirect;

use actix_web::web::{scope, ServiceConfig};

pub use redirect::redirect_short_url_endpoint;

pub fn url_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/url")
            .service(create::create_url_endpoint)
            .service(create::create_user_url_endpoint)
            .service(list::list_user_urls_endpoint)
            .service(list::list_urls_endpoint)
            .service(get::get_url_endpoint)
            .service(delete::delete_url_endpoint),
    );
}
