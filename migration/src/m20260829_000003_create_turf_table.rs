use sea_orm_migration::{prelude::*, schema::*};

use super::m20260829_000002_create_turf_owner_table::TurfOwner;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Turf::Table)
                    .if_not_exists()
                    .col(uuid(Turf::Id).primary_key())
                    .col(uuid(Turf::OwnerId))
                    .col(string(Turf::Name))
                    .col(string(Turf::Address))
                    .col(string(Turf::City))
                    .col(string(Turf::State))
                    .col(string(Turf::Pincode))
                    .col(json(Turf::Sports))
                    .col(json(Turf::AvailableSports))
                    .col(integer(Turf::Capacity))
                    .col(json(Turf::Facilities))
                    .col(json(Turf::Equipments))
                    .col(json(Turf::Days))
                    .col(json(Turf::Timings))
                    .col(json(Turf::Rules))
                    .col(json(Turf::Images))
                    .col(json(Turf::PaymentInfo))
                    .col(string_len(Turf::Status, 16))
                    .col(integer(Turf::Rating))
                    .col(
                        timestamp(Turf::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Turf::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_turf_owner_id")
                            .from(Turf::Table, Turf::OwnerId)
                            .to(TurfOwner::Table, TurfOwner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_turf_city_state")
                    .table(Turf::Table)
                    .col(Turf::City)
                    .col(Turf::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Turf::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Turf {
    #[sea_orm(iden = "turfs")]
    Table,
    Id,
    OwnerId,
    Name,
    Address,
    City,
    State,
    Pincode,
    Sports,
    AvailableSports,
    Capacity,
    Facilities,
    Equipments,
    Days,
    Timings,
    Rules,
    Images,
    PaymentInfo,
    Status,
    Rating,
    CreatedAt,
    UpdatedAt,
}
