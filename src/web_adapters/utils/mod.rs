use std::fmt::Debug;

use actix_web::{error::InternalError, http::StatusCode, web::JsonConfig, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};
use use_cases::{auth::types::TokenIssued, pagination::{Listed, Pagination}};

pub const NOT_AUTHORIZED: &str = "Not authorized to access this route";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub pagination: Pagination,
    pub data: Vec<T>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

fn error_body(error_message: &str) -> ErrorResponse {
    ErrorResponse {
        success: false,
        error: error_message.to_string(),
    }
}

/// OK
pub fn response_200<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(DataResponse {
        success: true,
        data,
    })
}

/// Created
pub fn response_201<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(DataResponse {
        success: true,
        data,
    })
}

pub fn response_list<T: Serialize>(listed: Listed<T>) -> HttpResponse {
    HttpResponse::Ok().json(ListResponse {
        success: true,
        count: listed.items.len(),
        total: listed.total,
        pagination: listed.pagination,
        data: listed.items,
    })
}

pub fn response_token(status: StatusCode, issued: TokenIssued) -> HttpResponse {
    HttpResponse::build(status).json(TokenResponse {
        success: true,
        token: issued.token,
    })
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(error_body(error_message))
}

/// Unauthorized
pub fn response_401(error_message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(error_body(error_message))
}

/// Forbidden
pub fn response_403(error_message: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(error_body(error_message))
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(error_body(error_message))
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(error_body(
        "Some unexpected error happened. Please try again later.",
    ))
}

/// Service Unavailable: with logging
pub fn response_503(error_message: &str) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "Dependency unavailable: {}", error_message);
    HttpResponse::ServiceUnavailable().json(error_body(error_message))
}

/// Malformed JSON bodies answer 400 with the usual error envelope.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let response = response_400(&err.to_string());
        InternalError::from_response(err, response).into()
    })
}
