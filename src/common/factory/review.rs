use chrono::Utc;
use entities::review;
use sea_orm::Set;
use uuid::Uuid;

pub fn review(restaurant_id: Uuid, user_id: Uuid) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(Uuid::now_v7()),
        restaurant_id: Set(restaurant_id),
        user_id: Set(user_id),
        title: Set("Solid pasta".to_string()),
        text: Set("Would come back for the carbonara.".to_string()),
        rating: Set(8),
        created_at: Set(Utc::now().into()),
    }
}

pub trait ReviewFactory {
    fn rating(self, rating: i32) -> review::ActiveModel;
}

impl ReviewFactory for review::ActiveModel {
    fn rating(mut self, rating: i32) -> review::ActiveModel {
        self.rating = Set(rating);
        self
    }
}
