use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260829_000001_create_user_table::User, m20260829_000003_create_turf_table::Turf,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::TurfId))
                    .col(uuid(Booking::UserId))
                    .col(date(Booking::Date))
                    .col(date(Booking::EndDate))
                    .col(string(Booking::Sport))
                    .col(json(Booking::TimeSlots))
                    .col(integer(Booking::Cost))
                    .col(string_len(Booking::Status, 16))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_turf_id")
                            .from(Booking::Table, Booking::TurfId)
                            .to(Turf::Table, Turf::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The availability engine filters by turf and date range on every
        // overlap check and slot query.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_turf_date")
                    .table(Booking::Table)
                    .col(Booking::TurfId)
                    .col(Booking::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    TurfId,
    UserId,
    Date,
    EndDate,
    Sport,
    TimeSlots,
    Cost,
    Status,
    CreatedAt,
}
