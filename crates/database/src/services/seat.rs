use crate::entities::seat;
use models::seat::NewSeat;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct SeatService;

impl SeatService {
    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<seat::Model>, DbErr> {
        seat::Entity::find()
            .order_by_asc(seat::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Option<seat::Model>, DbErr> {
        seat::Entity::find_by_id(id).one(db).await
    }

    /// All seats of a room, available or not
    pub async fn find_by_room_id<C: ConnectionTrait>(
        db: &C,
        room_id: i32,
    ) -> Result<Vec<seat::Model>, DbErr> {
        seat::Entity::find()
            .filter(seat::Column::RoomId.eq(room_id))
            .order_by_asc(seat::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_available_by_room_id<C: ConnectionTrait>(
        db: &C,
        room_id: i32,
    ) -> Result<Vec<seat::Model>, DbErr> {
        Self::find_by_room_id_and_availability(db, room_id, true).await
    }

    /// Seats of a room whose `available` flag equals `available`
    pub async fn find_by_room_id_and_availability<C: ConnectionTrait>(
        db: &C,
        room_id: i32,
        available: bool,
    ) -> Result<Vec<seat::Model>, DbErr> {
        seat::Entity::find()
            .filter(seat::Column::RoomId.eq(room_id))
            .filter(seat::Column::Available.eq(available))
            .order_by_asc(seat::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_room_id_and_seat_number<C: ConnectionTrait>(
        db: &C,
        room_id: i32,
        seat_number: &str,
    ) -> Result<Option<seat::Model>, DbErr> {
        seat::Entity::find()
            .filter(seat::Column::RoomId.eq(room_id))
            .filter(seat::Column::SeatNumber.eq(seat_number))
            .one(db)
            .await
    }

    pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
        seat::Entity::find().count(db).await
    }

    /// Inserts a new seat, or replaces every field of the seat with `id`
    pub async fn save<C: ConnectionTrait>(
        db: &C,
        id: Option<i32>,
        new_seat: NewSeat,
    ) -> Result<seat::Model, DbErr> {
        let existing = match id {
            Some(id) => seat::Entity::find_by_id(id).one(db).await?,
            None => None,
        };

        let active = seat::ActiveModel {
            id: NotSet,
            seat_number: Set(new_seat.seat_number),
            position_description: Set(new_seat.position_description),
            room_id: Set(new_seat.room_id),
            available: Set(new_seat.available),
        };

        match existing {
            Some(existing) => {
                seat::ActiveModel {
                    id: Unchanged(existing.id),
                    ..active
                }
                .update(db)
                .await
            }
            None => active.insert(db).await,
        }
    }

    /// Deleting a seat that does not exist is not an error
    pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), DbErr> {
        seat::Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
