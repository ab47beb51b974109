mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

use crate::RequireAuthenticated;

/// Administration of user accounts. Every route requires an admin.
pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .wrap(RequireAuthenticated)
            .service(list::list_users_endpoint)
            .service(get::get_user_endpoint)
            .service(create::create_user_endpoint)
            .service(update::update_user_endpoint)
            .service(delete::delete_user_endpoint),
    );
}
