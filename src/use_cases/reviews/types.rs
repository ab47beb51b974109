use entities::{restaurant, review};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{validation::bounded, UseCaseError};

pub const TITLE_MAX: usize = 100;
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

pub(crate) const ALREADY_REVIEWED: &str = "User has already reviewed this restaurant";

#[derive(Deserialize, Debug, Clone)]
pub struct ReviewCreateRequest {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReviewUpdateRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    pub id: Uuid,
    pub name: String,
    pub about: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewWithRestaurant {
    #[serde(flatten)]
    pub review: review::Model,
    pub restaurant: Option<RestaurantSummary>,
}

impl From<(review::Model, Option<restaurant::Model>)> for ReviewWithRestaurant {
    fn from((review, restaurant): (review::Model, Option<restaurant::Model>)) -> Self {
        Self {
            review,
            restaurant: restaurant.map(|r| RestaurantSummary {
                id: r.id,
                name: r.name,
                about: r.about,
            }),
        }
    }
}

pub(crate) fn validate_title(title: &str) -> Result<String, UseCaseError> {
    bounded("title", title, TITLE_MAX)
}

pub(crate) fn validate_text(text: &str) -> Result<String, UseCaseError> {
    bounded("text", text, usize::MAX)
}

pub(crate) fn validate_rating(rating: i32) -> Result<i32, UseCaseError> {
    match RATING_RANGE.contains(&rating) {
        true => Ok(rating),
        false => Err(UseCaseError::BadRequest(format!(
            "Please add a rating between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        ))),
    }
}
