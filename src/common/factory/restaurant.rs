use chrono::Utc;
use entities::restaurant;
use sea_orm::Set;
use uuid::Uuid;

pub fn restaurant(user_id: Uuid) -> restaurant::ActiveModel {
    let name = format!("Restaurant {}", Uuid::now_v7().simple());
    restaurant::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(user_id),
        slug: Set(name.to_lowercase().replace(' ', "-")),
        name: Set(name),
        cuisine: Set(Some("Italian".to_string())),
        about: Set(None),
        website: Set(None),
        phone: Set(None),
        email: Set(None),
        photo: Set("no-photo.jpg".to_string()),
        average_rating: Set(None),
        longitude: Set(None),
        latitude: Set(None),
        formatted_address: Set(None),
        street: Set(None),
        city: Set(None),
        county: Set(None),
        postal_code: Set(None),
        country: Set(None),
        created_at: Set(Utc::now().into()),
    }
}

pub trait RestaurantFactory {
    fn name(self, name: &str) -> restaurant::ActiveModel;
    fn located_at(self, latitude: f64, longitude: f64) -> restaurant::ActiveModel;
}

impl RestaurantFactory for restaurant::ActiveModel {
    fn name(mut self, name: &str) -> restaurant::ActiveModel {
        self.slug = Set(name.to_lowercase().replace(' ', "-"));
        self.name = Set(name.to_string());
        self
    }

    fn located_at(mut self, latitude: f64, longitude: f64) -> restaurant::ActiveModel {
        self.latitude = Set(Some(latitude));
        self.longitude = Set(Some(longitude));
        self
    }
}
