#[cfg(feature = "db")]
pub mod db;
#[cfg(feature = "factory")]
pub mod factory;
#[cfg(feature = "geocoder")]
pub mod geocoder;
#[cfg(feature = "settings")]
pub mod settings;
#[cfg(feature = "token")]
pub mod token;
