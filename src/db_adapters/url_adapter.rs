use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::url::{ActiveModel, Column, Entity, Model};

use crate::{fetch_page, owned_within, Order, OwnerScope, Page, PageParams};

#[derive(Clone)]
pub struct UrlAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UrlAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UrlFilter {
    fn filter_eq_user_id(self, user_id: Uuid) -> Self;
    fn filter_eq_orig_url(self, orig_url: &str) -> Self;
}

impl UrlFilter for UrlAdapter<'_> {
    fn filter_eq_user_id(mut self, user_id: Uuid) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user_id));
        self
    }

    fn filter_eq_orig_url(mut self, orig_url: &str) -> Self {
        self.query = self.query.filter(Column::OrigUrl.eq(orig_url));
        self
    }
}

pub trait UrlOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_clicks(self, order: Order) -> Self;
}

impl UrlOrder for UrlAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_clicks(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Clicks, order);
        self
    }
}

pub trait UrlQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_url_id(self, url_id: &str) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_page(self, params: PageParams) -> impl Future<Output = Result<Page<Model>, DbErr>>;
}

impl UrlQuery for UrlAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_url_id(self, url_id: &str) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::UrlId.eq(url_id))
            .one(self.db)
            .await
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

#[derive(Debug, Clone)]
pub struct CreateUrlParams {
    pub url_id: String,
    pub orig_url: String,
    pub short_url: String,
    pub user_id: Option<Uuid>,
}

pub trait UrlMutation {
    fn create(self, params: CreateUrlParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn increment_clicks(self, id: Uuid) -> impl Future<Output = Result<(), DbErr>>;
    /// Number of deleted rows; 0 when no url with `id` is within `scope`.
    fn delete(self, id: Uuid, scope: OwnerScope) -> impl Future<Output = Result<u64, DbErr>>;
}

impl UrlMutation for UrlAdapter<'_> {
    async fn create(self, params: CreateUrlParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            url_id: Set(params.url_id),
            orig_url: Set(params.orig_url),
            short_url: Set(params.short_url),
            clicks: Set(0),
            user_id: Set(params.user_id),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
    }

    async fn increment_clicks(self, id: Uuid) -> Result<(), DbErr> {
        Entity::update_many()
            .col_expr(Column::Clicks, Expr::col(Column::Clicks).add(1))
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
