use once_cell::sync::Lazy;
use regex::Regex;

use crate::UseCaseError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static HTTP_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(:[0-9]{1,5})?([/?#][^\s]*)?$")
        .expect("url pattern is valid")
});

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub(crate) fn is_http_url(value: &str) -> bool {
    HTTP_URL_RE.is_match(value)
}

pub(crate) fn required(field: &str, value: &str) -> Result<String, UseCaseError> {
    let value = value.trim();
    match value.is_empty() {
        true => Err(UseCaseError::BadRequest(format!("Please add a {}", field))),
        false => Ok(value.to_string()),
    }
}

pub(crate) fn max_chars(field: &str, value: &str, max: usize) -> Result<(), UseCaseError> {
    match value.chars().count() > max {
        true => Err(UseCaseError::BadRequest(format!(
            "{} can not be more than {} characters",
            field, max
        ))),
        false => Ok(()),
    }
}

/// Trimmed, non-empty and at most `max` characters.
pub(crate) fn bounded(field: &str, value: &str, max: usize) -> Result<String, UseCaseError> {
    let value = required(field, value)?;
    max_chars(field, &value, max)?;
    Ok(value)
}

pub(crate) fn email(value: &str) -> Result<String, UseCaseError> {
    let value = value.trim();
    match is_email(value) {
        true => Ok(value.to_lowercase()),
        false => Err(UseCaseError::BadRequest(
            "Please add a valid email".to_string(),
        )),
    }
}
