mod login;
mod me;
mod register;
mod update_details;
mod update_password;

use actix_web::web::{scope, ServiceConfig};

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/auth")
            .service(register::register_endpoint)
            .service(login::login_endpoint)
            .service(me::me_endpoint)
            .service(update_details::update_details_endpoint)
            .service(update_password::update_password_endpoint),
    );
}
