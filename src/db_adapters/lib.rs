pub mod restaurant_adapter;
pub mod review_adapter;
pub mod url_adapter;
pub mod user_adapter;

pub use sea_orm::Order;

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Select,
};
use uuid::Uuid;

/// Rows a mutation may touch.
///
/// `Owner` adds `owner_column = id` to the statement itself, so the ownership check and
/// the write are a single round trip to the database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OwnerScope {
    Any,
    Owner(Uuid),
}

pub(crate) fn owned_within<C: ColumnTrait>(owner_column: C, scope: OwnerScope) -> Condition {
    match scope {
        OwnerScope::Any => Condition::all(),
        OwnerScope::Owner(user_id) => Condition::all().add(owner_column.eq(user_id)),
    }
}

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

pub(crate) async fn fetch_page<E, C>(
    db: &C,
    query: Select<E>,
    params: PageParams,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    let paginator = query.paginate(db, params.limit.max(1));
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(params.page.saturating_sub(1)).await?;
    Ok(Page { items, total })
}
