pub use sea_orm_migration::prelude::*;

mod m20260829_000001_create_user_table;
mod m20260829_000002_create_turf_owner_table;
mod m20260829_000003_create_turf_table;
mod m20260829_000004_create_booking_table;
mod m20260829_000005_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_user_table::Migration),
            Box::new(m20260829_000002_create_turf_owner_table::Migration),
            Box::new(m20260829_000003_create_turf_table::Migration),
            Box::new(m20260829_000004_create_booking_table::Migration),
            Box::new(m20260829_000005_create_review_table::Migration),
        ]
    }
}
