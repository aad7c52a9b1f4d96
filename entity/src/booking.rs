use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub turf_id: Uuid,
    pub user_id: Uuid,
    /// First calendar day of the reservation window.
    pub date: Date,
    /// Last calendar day of the reservation window, inclusive.
    pub end_date: Date,
    pub sport: String,
    /// Slot labels reserved on every day of the window.
    #[sea_orm(column_type = "Json")]
    pub time_slots: StringList,
    pub cost: i32,
    pub status: BookingStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    /// Terminal; cancelled bookings no longer occupy their slots.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::turf::Entity",
        from = "Column::TurfId",
        to = "super::turf::Column::Id"
    )]
    Turf,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::turf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turf.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
