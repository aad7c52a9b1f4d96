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
                    .table(Review::Table)
                    .if_not_exists()
                    .col(uuid(Review::Id).primary_key())
                    .col(uuid(Review::TurfId))
                    .col(uuid(Review::UserId))
                    .col(integer(Review::Rating))
                    .col(string(Review::Comment))
                    .col(
                        timestamp(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_turf_id")
                            .from(Review::Table, Review::TurfId)
                            .to(Turf::Table, Turf::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    TurfId,
    UserId,
    Rating,
    Comment,
    CreatedAt,
}
