use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{SlotCalendar, StringList};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turfs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    /// Every sport the turf supports.
    #[sea_orm(column_type = "Json")]
    pub sports: StringList,
    /// Sports currently open for booking; always a subset of `sports`.
    #[sea_orm(column_type = "Json")]
    pub available_sports: StringList,
    pub capacity: i32,
    #[sea_orm(column_type = "Json")]
    pub facilities: StringList,
    #[sea_orm(column_type = "Json")]
    pub equipments: StringList,
    /// Lowercase names of the days the turf is open.
    #[sea_orm(column_type = "Json")]
    pub days: StringList,
    /// Slot vocabulary per open day.
    #[sea_orm(column_type = "Json")]
    pub timings: SlotCalendar,
    #[sea_orm(column_type = "Json")]
    pub rules: StringList,
    #[sea_orm(column_type = "Json")]
    pub images: StringList,
    pub payment_info: Json,
    pub status: TurfStatus,
    pub rating: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TurfStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::turf_owner::Entity",
        from = "Column::OwnerId",
        to = "super::turf_owner::Column::Id"
    )]
    TurfOwner,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::turf_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TurfOwner.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
