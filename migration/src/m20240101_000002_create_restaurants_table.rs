use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        double_null, string, string_len, string_len_null, string_null, text_null,
        timestamp_with_time_zone, uuid,
    },
};

use crate::m20240101_000001_create_users_table::User;

const LOCATION_INDEX_NAME: &str = "restaurants_latitude_longitude_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(uuid(Restaurant::Id).primary_key())
                    .col(uuid(Restaurant::UserId))
                    .col(string_len(Restaurant::Name, 50).unique_key())
                    .col(string(Restaurant::Slug))
                    .col(string_len_null(Restaurant::Cuisine, 25))
                    .col(text_null(Restaurant::About))
                    .col(string_null(Restaurant::Website))
                    .col(string_len_null(Restaurant::Phone, 20))
                    .col(string_null(Restaurant::Email))
                    .col(string(Restaurant::Photo).default("no-photo.jpg"))
                    .col(double_null(Restaurant::AverageRating))
                    .col(double_null(Restaurant::Longitude))
                    .col(double_null(Restaurant::Latitude))
                    .col(string_null(Restaurant::FormattedAddress))
                    .col(string_null(Restaurant::Street))
                    .col(string_null(Restaurant::City))
                    .col(string_null(Restaurant::County))
                    .col(string_null(Restaurant::PostalCode))
                    .col(string_null(Restaurant::Country))
                    .col(
                        timestamp_with_time_zone(Restaurant::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-restaurants-user_id")
                            .from(Restaurant::Table, Restaurant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(LOCATION_INDEX_NAME)
                    .table(Restaurant::Table)
                    .col(Restaurant::Latitude)
                    .col(Restaurant::Longitude)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(LOCATION_INDEX_NAME)
                    .table(Restaurant::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    #[sea_orm(iden = "restaurants")]
    Table,
    Id,
    UserId,
    Name,
    Slug,
    Cuisine,
    About,
    Website,
    Phone,
    Email,
    Photo,
    AverageRating,
    Longitude,
    Latitude,
    FormattedAddress,
    Street,
    City,
    County,
    PostalCode,
    Country,
    CreatedAt,
}
