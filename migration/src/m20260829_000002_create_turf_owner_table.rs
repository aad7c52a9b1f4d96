use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TurfOwner::Table)
                    .if_not_exists()
                    .col(uuid(TurfOwner::Id).primary_key())
                    .col(json(TurfOwner::TurfIds))
                    .col(string(TurfOwner::Name))
                    .col(string(TurfOwner::Address))
                    .col(string(TurfOwner::City))
                    .col(string(TurfOwner::State))
                    .col(string_uniq(TurfOwner::Phone))
                    .col(string_uniq(TurfOwner::Email))
                    .col(string(TurfOwner::PasswordHash))
                    .col(string(TurfOwner::IdProof))
                    .col(json(TurfOwner::PaymentInfo))
                    .col(
                        timestamp(TurfOwner::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TurfOwner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TurfOwner {
    #[sea_orm(iden = "turf_owners")]
    Table,
    Id,
    TurfIds,
    Name,
    Address,
    City,
    State,
    Phone,
    Email,
    PasswordHash,
    IdProof,
    PaymentInfo,
    CreatedAt,
}
