use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use uuid::Uuid;

use entities::{
    restaurant,
    review::{ActiveModel, Column, Entity, Model},
};

use crate::{fetch_page, owned_within, Order, OwnerScope, Page, PageParams};

#[derive(Clone)]
pub struct ReviewAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ReviewAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait ReviewFilter {
    fn filter_eq_restaurant_id(self, restaurant_id: Uuid) -> Self;
    fn filter_eq_user_id(self, user_id: Uuid) -> Self;
}

impl ReviewFilter for ReviewAdapter<'_> {
    fn filter_eq_restaurant_id(mut self, restaurant_id: Uuid) -> Self {
        self.query = self.query.filter(Column::RestaurantId.eq(restaurant_id));
        self
    }

    fn filter_eq_user_id(mut self, user_id: Uuid) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user_id));
        self
    }
}

pub trait ReviewOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_rating(self, order: Order) -> Self;
}

impl ReviewOrder for ReviewAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_rating(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Rating, order);
        self
    }
}

pub trait ReviewQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_with_restaurant(
        self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<(Model, Option<restaurant::Model>)>, DbErr>>;
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_page(self, params: PageParams) -> impl Future<Output = Result<Page<Model>, DbErr>>;
    fn get_ratings(self) -> impl Future<Output = Result<Vec<i32>, DbErr>>;
}

impl ReviewQuery for ReviewAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_with_restaurant(
        self,
        id: Uuid,
    ) -> Result<Option<(Model, Option<restaurant::Model>)>, DbErr> {
        self.query
            .filter(Column::Id.eq(id))
            .find_also_related(restaurant::Entity)
            .one(self.db)
            .await
    }

    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }

    async fn get_page(self, params: PageParams) -> Result<Page<Model>, DbErr> {
        fetch_page(self.db, self.query, params).await
    }

    async fn get_ratings(self) -> Result<Vec<i32>, DbErr> {
        self.query
            .select_only()
            .column(Column::Rating)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

pub trait ReviewMutation {
    fn create(self, params: CreateReviewParams) -> impl Future<Output = Result<Model, DbErr>>;
    /// Returns `None` when no review with `id` is within `scope`.
    fn update(
        self,
        id: Uuid,
        scope: OwnerScope,
        params: UpdateReviewParams,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    /// Number of deleted rows; 0 when no review with `id` is within `scope`.
    fn delete(self, id: Uuid, scope: OwnerScope) -> impl Future<Output = Result<u64, DbErr>>;
}

impl ReviewMutation for ReviewAdapter<'_> {
    async fn create(self, params: CreateReviewParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            restaurant_id: Set(params.restaurant_id),
            user_id: Set(params.user_id),
            title: Set(params.title),
            text: Set(params.text),
            rating: Set(params.rating),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(
        self,
        id: Uuid,
        scope: OwnerScope,
        params: UpdateReviewParams,
    ) -> Result<Option<Model>, DbErr> {
        let mut review = ActiveModel {
            ..Default::default()
        };
        if let Some(title) = params.title {
            review.title = Set(title);
        }
        if let Some(text) = params.text {
            review.text = Set(text);
        }
        if let Some(rating) = params.rating {
            review.rating = Set(rating);
        }
        if !review.is_changed() {
            return Entity::find()
                .filter(Column::Id.eq(id))
                .filter(owned_within(Column::UserId, scope))
                .one(self.db)
                .await;
        }

        let res = Entity::update_many()
            .set(review)
            .filter(Column::Id.eq(id))
            .filter(owned_within(Column::UserId, scope))
            .exec(self.db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(id).one(self.db).await
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
