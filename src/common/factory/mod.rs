mod restaurant;
mod review;
mod url;
mod user;

pub use restaurant::*;
pub use review::*;
pub use url::*;
pub use user::*;
