use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::UuidList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turf_owners")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Ids of the turfs this owner manages, maintained by the owner API.
    #[sea_orm(column_type = "Json")]
    pub turf_ids: UuidList,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[sea_orm(unique)]
    pub phone: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub id_proof: String,
    pub payment_info: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::turf::Entity")]
    Turf,
}

impl Related<super::turf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turf.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
