use crate::schema::{CATALOG_SCHEMA, create_schema_if_missing};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // PostgreSQL only; a no-op elsewhere
        create_schema_if_missing(manager.get_connection(), CATALOG_SCHEMA).await?;

        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::Building).string().not_null())
                    .col(ColumnDef::new(Rooms::Floor).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::RoomNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Type).string_len(32).not_null())
                    .col(ColumnDef::new(Rooms::TotalSeats).integer())
                    .to_owned(),
            )
            .await?;

        // Create seats table
        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seats::SeatNumber).string().not_null())
                    .col(ColumnDef::new(Seats::PositionDescription).string())
                    .col(ColumnDef::new(Seats::RoomId).integer().not_null())
                    .col(
                        ColumnDef::new(Seats::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-seats-room_id")
                            .from(Seats::Table, Seats::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create room_facilities table, one row per (room, facility) pair
        manager
            .create_table(
                Table::create()
                    .table(RoomFacilities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoomFacilities::RoomId).integer().not_null())
                    .col(ColumnDef::new(RoomFacilities::Facility).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(RoomFacilities::RoomId)
                            .col(RoomFacilities::Facility),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-room_facilities-room_id")
                            .from(RoomFacilities::Table, RoomFacilities::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(RoomFacilities::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Seats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Rooms {
    Table,
    Id,
    Building,
    Floor,
    RoomNumber,
    Type,
    TotalSeats,
}

#[derive(Iden)]
pub(crate) enum Seats {
    Table,
    Id,
    SeatNumber,
    PositionDescription,
    RoomId,
    Available,
}

#[derive(Iden)]
pub(crate) enum RoomFacilities {
    Table,
    RoomId,
    Facility,
}
