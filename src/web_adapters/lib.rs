mod auth;
mod middlewares;
mod restaurants;
mod reviews;
mod urls;
mod users;
mod utils;

pub use auth::auth_routes;
pub use middlewares::auth::{RequireAuthenticated, RequireRole};
pub use restaurants::restaurant_routes;
pub use reviews::review_routes;
pub use urls::{redirect_short_url_endpoint, url_routes};
pub use users::user_routes;
pub use utils::json_config;
