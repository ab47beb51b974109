use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{integer, string, string_len_uniq, timestamp_with_time_zone, uuid, uuid_null},
};

use crate::m20240101_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Url::Table)
                    .if_not_exists()
                    .col(uuid(Url::Id).primary_key())
                    .col(string_len_uniq(Url::UrlId, 10))
                    .col(string(Url::OrigUrl))
                    .col(string(Url::ShortUrl))
                    .col(integer(Url::Clicks).default(0))
                    .col(uuid_null(Url::UserId))
                    .col(
                        timestamp_with_time_zone(Url::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-urls-user_id")
                            .from(Url::Table, Url::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Url::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Url {
    #[sea_orm(iden = "urls")]
    Table,
    Id,
    UrlId,
    OrigUrl,
    ShortUrl,
    Clicks,
    UserId,
    CreatedAt,
}
