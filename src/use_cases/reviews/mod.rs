pub mod create;
pub mod delete;
pub mod get;
pub mod list;
mod rating;
pub mod types;
pub mod update;
