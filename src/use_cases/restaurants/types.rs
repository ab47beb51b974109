use serde::Deserialize;

use crate::{
    validation::{bounded, email, is_http_url, max_chars},
    UseCaseError,
};

pub const NAME_MAX: usize = 50;
pub const CUISINE_MAX: usize = 25;
pub const ABOUT_MAX: usize = 1000;
pub const PHONE_MAX: usize = 20;

pub(crate) const DUPLICATE_NAME: &str = "A restaurant with this name already exists";

#[derive(Deserialize, Debug, Clone)]
pub struct RestaurantCreateRequest {
    pub name: String,
    pub cuisine: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Geocoded into the stored location; never stored itself.
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RestaurantUpdateRequest {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Validated optional columns. Blank input counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Details {
    pub cuisine: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Details {
    pub(crate) fn validate(
        cuisine: Option<String>,
        about: Option<String>,
        website: Option<String>,
        phone: Option<String>,
        email_address: Option<String>,
    ) -> Result<Self, UseCaseError> {
        let cuisine = present(cuisine);
        if let Some(cuisine) = &cuisine {
            max_chars("cuisine", cuisine, CUISINE_MAX)?;
        }
        let about = present(about);
        if let Some(about) = &about {
            max_chars("about", about, ABOUT_MAX)?;
        }
        let website = present(website);
        if let Some(website) = &website {
            if !is_http_url(website) {
                return Err(UseCaseError::BadRequest(
                    "Please use a valid URL with HTTP or HTTPS".to_string(),
                ));
            }
        }
        let phone = present(phone);
        if let Some(phone) = &phone {
            max_chars("phone", phone, PHONE_MAX)?;
        }
        let email_address = present(email_address).as_deref().map(email).transpose()?;

        Ok(Self {
            cuisine,
            about,
            website,
            phone,
            email: email_address,
        })
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, UseCaseError> {
    bounded("name", name, NAME_MAX)
}

/// `"Joe's Café & Bar"` becomes `"joes-café-and-bar"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for word in name
        .to_lowercase()
        .replace('&', " and ")
        .replace(['\'', '\u{2019}'], "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    slug
}
