pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod redirect;
pub mod short_id;
pub mod types;
