pub mod create;
pub mod delete;
pub mod get;
pub mod list;
mod location;
pub mod photo;
pub mod radius;
pub mod types;
pub mod update;
