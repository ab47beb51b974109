use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    access_control::USER_ACCESS, pagination::ListQuery, users::list::list_users, UseCaseError,
};

use crate::{
    utils::{response_400, response_500, response_list},
    RequireRole,
};

#[tracing::instrument(name = "Listing users", skip(db))]
#[get("", wrap = "RequireRole::new(USER_ACCESS.read)")]
pub async fn list_users_endpoint(db: Data<DbConn>, query: Query<ListQuery>) -> HttpResponse {
    match list_users(query.into_inner(), UserAdapter::init(&db)).await {
        Ok(listed) => response_list(listed),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
