use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
    Set,
};
use uuid::Uuid;

use entities::restaurant::{ActiveModel, Column, Entity, Model};

use crate::{fetch_page, owned_within, Order, OwnerScope, Page, PageParams};

pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

#[derive(Clone)]
pub struct RestaurantAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> RestaurantAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

/// Inclusive latitude/longitude rectangle, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

pub trait RestaurantFilter {
    fn filter_eq_user_id(self, user_id: Uuid) -> Self;
    fn filter_within(self, bounds: BoundingBox) -> Self;
}

impl RestaurantFilter for RestaurantAdapter<'_> {
    fn filter_eq_user_id(mut self, user_id: Uuid) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user_id));
        self
    }

    fn filter_within(mut self, bounds: BoundingBox) -> Self {
        self.query = self
            .query
            .filter(Column::Latitude.between(bounds.min_latitude, bounds.max_latitude))
            .filter(Column::Longitude.between(bounds.min_longitude, bounds.max_longitude));
        self
    }
}

pub trait RestaurantOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_name(self, order: Order) -> Self;
    fn order_by_average_rating(self, order: Order) -> Self;
}

impl RestaurantOrder for RestaurantAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_name(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Name, order);
        self
    }

    fn order_by_average_rating(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::AverageRating, order);
        self
    }
}

pub trait RestaurantQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_page(self, params: PageParams) -> impl Future<Output = Result<Page<Model>, DbErr>>;
}

impl RestaurantQuery for RestaurantAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_page(self, params: PageParams) -> Result<Page<Model>, DbErr> {
        fetch_page(self.db, self.query, params).await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationParams {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateRestaurantParams {
    pub user_id: Uuid,
    pub name: String,
    pub slug: String,
    pub cuisine: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<LocationParams>,
}

/// `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRestaurantParams {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub cuisine: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<LocationParams>,
}

fn set_location(restaurant: &mut ActiveModel, location: LocationParams) {
    restaurant.latitude = Set(Some(location.latitude));
    restaurant.longitude = Set(Some(location.longitude));
    restaurant.formatted_address = Set(location.formatted_address);
    restaurant.street = Set(location.street);
    restaurant.city = Set(location.city);
    restaurant.county = Set(location.county);
    restaurant.postal_code = Set(location.postal_code);
    restaurant.country = Set(location.country);
}

pub trait RestaurantMutation {
    fn create(self, params: CreateRestaurantParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    /// Returns `None` when no restaurant with `id` is within `scope`.
    fn update(
        self,
        id: Uuid,
        scope: OwnerScope,
        params: UpdateRestaurantParams,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn update_photo(
        self,
        id: Uuid,
        scope: OwnerScope,
        photo: String,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn update_average_rating(
        self,
        id: Uuid,
        average_rating: Option<f64>,
    ) -> impl Future<Output = Result<(), DbErr>>;
    /// Number of deleted rows; 0 when no restaurant with `id` is within `scope`.
    fn delete(self, id: Uuid, scope: OwnerScope) -> impl Future<Output = Result<u64, DbErr>>;
}

impl RestaurantAdapter<'_> {
    async fn update_within(
        &self,
        id: Uuid,
        scope: OwnerScope,
        restaurant: ActiveModel,
    ) -> Result<Option<Model>, DbErr> {
        if !restaurant.is_changed() {
            return Entity::find()
                .filter(Column::Id.eq(id))
                .filter(owned_within(Column::UserId, scope))
                .one(self.db)
                .await;
        }

        let res = Entity::update_many()
            .set(restaurant)
            .filter(Column::Id.eq(id))
            .filter(owned_within(Column::UserId, scope))
            .exec(self.db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(id).one(self.db).await
    }
}

impl RestaurantMutation for RestaurantAdapter<'_> {
    async fn create(self, params: CreateRestaurantParams) -> Result<Model, DbErr> {
        let mut restaurant = ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            user_id: Set(params.user_id),
            name: Set(params.name),
            slug: Set(params.slug),
            cuisine: Set(params.cuisine),
            about: Set(params.about),
            website: Set(params.website),
            phone: Set(params.phone),
            email: Set(params.email),
            photo: Set(DEFAULT_PHOTO.to_string()),
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
        };
        if let Some(location) = params.location {
            set_location(&mut restaurant, location);
        }
        restaurant.insert(self.db).await
    }

    async fn update(
        self,
        id: Uuid,
        scope: OwnerScope,
        params: UpdateRestaurantParams,
    ) -> Result<Option<Model>, DbErr> {
        let mut restaurant = ActiveModel {
            ..Default::default()
        };
        if let Some(name) = params.name {
            restaurant.name = Set(name);
        }
        if let Some(slug) = params.slug {
            restaurant.slug = Set(slug);
        }
        if let Some(cuisine) = params.cuisine {
            restaurant.cuisine = Set(Some(cuisine));
        }
        if let Some(about) = params.about {
            restaurant.about = Set(Some(about));
        }
        if let Some(website) = params.website {
            restaurant.website = Set(Some(website));
        }
        if let Some(phone) = params.phone {
            restaurant.phone = Set(Some(phone));
        }
        if let Some(email) = params.email {
            restaurant.email = Set(Some(email));
        }
        if let Some(location) = params.location {
            set_location(&mut restaurant, location);
        }
        self.update_within(id, scope, restaurant).await
    }

    async fn update_photo(
        self,
        id: Uuid,
        scope: OwnerScope,
        photo: String,
    ) -> Result<Option<Model>, DbErr> {
        let restaurant = ActiveModel {
            photo: Set(photo),
            ..Default::default()
        };
        self.update_within(id, scope, restaurant).await
    }

    async fn update_average_rating(self, id: Uuid, average_rating: Option<f64>) -> Result<(), DbErr> {
        Entity::update_many()
            .set(ActiveModel {
                average_rating: Set(average_rating),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn delete(self, id: Uuid, scope: OwnerScope) -> Result<u64, DbErr> {
        Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(owned_within(Column::UserId, scope))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }
}
