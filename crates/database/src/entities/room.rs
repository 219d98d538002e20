use models::room_type::RoomType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub building: String,
    pub floor: i32,
    #[sea_orm(unique)]
    pub room_number: String,
    #[sea_orm(column_name = "type")]
    pub room_type: RoomType,
    pub total_seats: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seat::Entity")]
    Seats,
    #[sea_orm(has_many = "super::room_facility::Entity")]
    Facilities,
}

impl Related<super::seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seats.def()
    }
}

impl Related<super::room_facility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facilities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
