use crate::m20250901_create_catalog_tables::{RoomFacilities, Rooms, Seats};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Room listing filters
        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_building")
                    .table(Rooms::Table)
                    .col(Rooms::Building)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_type")
                    .table(Rooms::Table)
                    .col(Rooms::Type)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_facilities_facility")
                    .table(RoomFacilities::Table)
                    .col(RoomFacilities::Facility)
                    .to_owned(),
            )
            .await?;

        // A seat number may only appear once per room
        manager
            .create_index(
                Index::create()
                    .name("idx_seats_room_id_seat_number")
                    .table(Seats::Table)
                    .col(Seats::RoomId)
                    .col(Seats::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seats_room_id_available")
                    .table(Seats::Table)
                    .col(Seats::RoomId)
                    .col(Seats::Available)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_seats_room_id_available")
                    .table(Seats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_seats_room_id_seat_number")
                    .table(Seats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_room_facilities_facility")
                    .table(RoomFacilities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rooms_type")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rooms_building")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
