use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    sea_orm_active_enums::Role,
    user::{ActiveModel, Column, Entity, Model},
};

use crate::{fetch_page, Order, Page, PageParams};

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_role(self, role: Role) -> Self;
}

impl UserFilter for UserAdapter<'_> {
    fn filter_eq_role(mut self, role: Role) -> Self {
        self.query = self.query.filter(Column::Role.eq(role));
        self
    }
}

pub trait UserOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_name(self, order: Order) -> Self;
}

impl UserOrder for UserAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_name(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Name, order);
        self
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_page(self, params: PageParams) -> impl Future<Output = Result<Page<Model>, DbErr>>;
}

impl UserQuery for UserAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_email(self, email: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
    }

    async fn get_page(self, params: PageParams) -> Result<Page<Model>, DbErr> {
        fetch_page(self.db, self.query, params).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

pub trait UserMutation {
    fn create(self, params: CreateUserParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(
        self,
        user: Model,
        params: UpdateUserParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_password(
        self,
        user: Model,
        password: String,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, id: Uuid) -> impl Future<Output = Result<u64, DbErr>>;
}

impl UserMutation for UserAdapter<'_> {
    async fn create(self, params: CreateUserParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            name: Set(params.name),
            email: Set(params.email),
            password: Set(params.password),
            role: Set(params.role),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(self, user: Model, params: UpdateUserParams) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        if let Some(name) = params.name {
            user.name = Set(name);
        }
        if let Some(email) = params.email {
            user.email = Set(email);
        }
        if let Some(role) = params.role {
            user.role = Set(role);
        }
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn update_password(self, user: Model, password: String) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.password = Set(password);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn delete(self, id: Uuid) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }
}
