use std::fmt::Debug;

use sea_orm::{DbErr, SqlErr};

pub mod access_control;
pub mod auth;
pub mod pagination;
pub mod restaurants;
pub mod reviews;
pub mod urls;
pub mod users;
mod validation;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    Unauthorized(String),        // 401
    Forbidden(String),           // 403
    NotFound(String),            // 404
    ServiceUnavailable(String),  // 503
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}

pub(crate) fn is_duplicate(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Unique violations become a 400 carrying `message`, anything else a 500.
pub(crate) fn db_error(message: &str) -> impl Fn(DbErr) -> UseCaseError + '_ {
    move |e| match is_duplicate(&e) {
        true => UseCaseError::BadRequest(message.to_string()),
        false => error_500(e),
    }
}
