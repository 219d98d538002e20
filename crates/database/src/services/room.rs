use crate::entities::{room, room_facility, seat};
use log::debug;
use models::room::NewRoom;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionTrait, sea_query::JoinType,
};
use std::collections::HashMap;

/// A room row together with its facility tags, sorted alphabetically
pub type RoomWithFacilities = (room::Model, Vec<String>);

pub struct RoomService;

impl RoomService {
    /// Every room, ordered by id
    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<RoomWithFacilities>, DbErr> {
        let rooms = room::Entity::find()
            .order_by_asc(room::Column::Id)
            .all(db)
            .await?;

        Self::attach_facilities(db, rooms).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Option<RoomWithFacilities>, DbErr> {
        let room = room::Entity::find_by_id(id).one(db).await?;
        Self::attach_facilities_one(db, room).await
    }

    pub async fn find_by_room_number<C: ConnectionTrait>(
        db: &C,
        room_number: &str,
    ) -> Result<Option<RoomWithFacilities>, DbErr> {
        let room = room::Entity::find()
            .filter(room::Column::RoomNumber.eq(room_number))
            .one(db)
            .await?;
        Self::attach_facilities_one(db, room).await
    }

    pub async fn find_by_building<C: ConnectionTrait>(
        db: &C,
        building: &str,
    ) -> Result<Vec<RoomWithFacilities>, DbErr> {
        let rooms = room::Entity::find()
            .filter(room::Column::Building.eq(building))
            .order_by_asc(room::Column::Id)
            .all(db)
            .await?;

        Self::attach_facilities(db, rooms).await
    }

    /// Rooms whose stored type name equals `room_type` exactly
    ///
    /// The name is not checked against the known room types, so an unknown
    /// name simply matches nothing.
    pub async fn find_by_type<C: ConnectionTrait>(
        db: &C,
        room_type: &str,
    ) -> Result<Vec<RoomWithFacilities>, DbErr> {
        let rooms = room::Entity::find()
            .filter(room::Column::RoomType.eq(room_type))
            .order_by_asc(room::Column::Id)
            .all(db)
            .await?;

        Self::attach_facilities(db, rooms).await
    }

    /// Rooms whose facility set contains `facility`
    pub async fn find_by_facility<C: ConnectionTrait>(
        db: &C,
        facility: &str,
    ) -> Result<Vec<RoomWithFacilities>, DbErr> {
        let rooms = room::Entity::find()
            .join(JoinType::InnerJoin, room::Relation::Facilities.def())
            .filter(room_facility::Column::Facility.eq(facility))
            .order_by_asc(room::Column::Id)
            .all(db)
            .await?;

        Self::attach_facilities(db, rooms).await
    }

    pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
        room::Entity::find().count(db).await
    }

    /// Inserts a new room, or replaces every field of the room with `id`
    ///
    /// When `id` is `None` or names a room that does not exist, a new row is
    /// inserted with a generated id. The facility set is replaced wholesale.
    /// Duplicate room numbers are rejected by the storage layer.
    pub async fn save<C: ConnectionTrait + TransactionTrait>(
        db: &C,
        id: Option<i32>,
        new_room: NewRoom,
    ) -> Result<RoomWithFacilities, DbErr> {
        let txn = db.begin().await?;
        let mut facilities = new_room.distinct_facilities();

        let existing = match id {
            Some(id) => room::Entity::find_by_id(id).one(&txn).await?,
            None => None,
        };

        let (id, replacing) = match existing {
            Some(existing) => (Unchanged(existing.id), true),
            None => (NotSet, false),
        };

        let active = room::ActiveModel {
            id,
            building: Set(new_room.building),
            floor: Set(new_room.floor),
            room_number: Set(new_room.room_number),
            room_type: Set(new_room.room_type),
            total_seats: Set(new_room.total_seats),
        };

        let model = if replacing {
            let model = active.update(&txn).await?;
            room_facility::Entity::delete_many()
                .filter(room_facility::Column::RoomId.eq(model.id))
                .exec(&txn)
                .await?;
            model
        } else {
            active.insert(&txn).await?
        };

        if !facilities.is_empty() {
            room_facility::Entity::insert_many(facilities.iter().map(|facility| {
                room_facility::ActiveModel {
                    room_id: Set(model.id),
                    facility: Set(facility.clone()),
                }
            }))
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        debug!(
            "{} room {} ({})",
            if replacing { "Replaced" } else { "Inserted" },
            model.id,
            model.room_number
        );

        facilities.sort();
        Ok((model, facilities))
    }

    /// Deletes the room with `id` together with its seats and facility rows
    ///
    /// Deleting a room that does not exist is not an error.
    pub async fn delete_by_id<C: ConnectionTrait + TransactionTrait>(
        db: &C,
        id: i32,
    ) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        let seats = seat::Entity::delete_many()
            .filter(seat::Column::RoomId.eq(id))
            .exec(&txn)
            .await?;
        room_facility::Entity::delete_many()
            .filter(room_facility::Column::RoomId.eq(id))
            .exec(&txn)
            .await?;
        let rooms = room::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        debug!(
            "Deleted room {id}: {} room rows, {} seat rows",
            rooms.rows_affected, seats.rows_affected
        );
        Ok(())
    }

    async fn attach_facilities_one<C: ConnectionTrait>(
        db: &C,
        room: Option<room::Model>,
    ) -> Result<Option<RoomWithFacilities>, DbErr> {
        match room {
            Some(room) => Ok(Self::attach_facilities(db, vec![room]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Batch fetch the facilities of all `rooms` in a single query
    async fn attach_facilities<C: ConnectionTrait>(
        db: &C,
        rooms: Vec<room::Model>,
    ) -> Result<Vec<RoomWithFacilities>, DbErr> {
        if rooms.is_empty() {
            return Ok(vec![]);
        }

        let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
        let rows = room_facility::Entity::find()
            .filter(room_facility::Column::RoomId.is_in(room_ids))
            .order_by_asc(room_facility::Column::Facility)
            .all(db)
            .await?;

        let mut facilities_by_room: HashMap<i32, Vec<String>> = HashMap::new();
        for row in rows {
            facilities_by_room
                .entry(row.room_id)
                .or_default()
                .push(row.facility);
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let facilities = facilities_by_room.remove(&room.id).unwrap_or_default();
                (room, facilities)
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::test_db;
    use models::{room_type::RoomType, seat::NewSeat};

    use crate::services::seat::SeatService;

    fn library_room() -> NewRoom {
        NewRoom::new("Main Library", 2, "LIB-201", RoomType::QuietRoom, 20)
            .with_facilities(["WiFi", "AC"])
    }

    #[tokio::test]
    async fn test_save_then_find_by_id() {
        let db = test_db().await;

        let (saved, facilities) = RoomService::save(&db, None, library_room()).await.unwrap();
        assert!(saved.id > 0);
        assert_eq!(facilities, vec!["AC", "WiFi"]);

        let (found, found_facilities) = RoomService::find_by_id(&db, saved.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.building, "Main Library");
        assert_eq!(found.floor, 2);
        assert_eq!(found.room_number, "LIB-201");
        assert_eq!(found.room_type, RoomType::QuietRoom);
        assert_eq!(found.total_seats, Some(20));
        assert_eq!(found_facilities, vec!["AC", "WiFi"]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = test_db().await;
        assert!(RoomService::find_by_id(&db, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_room_number() {
        let db = test_db().await;
        RoomService::save(&db, None, library_room()).await.unwrap();

        let (room, _) = RoomService::find_by_room_number(&db, "LIB-201")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(room.building, "Main Library");
        assert!(
            RoomService::find_by_room_number(&db, "LIB-202")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_room_number_rejected() {
        let db = test_db().await;

        let first = NewRoom::new("Main Library", 1, "X-1", RoomType::QuietRoom, 4);
        let second = NewRoom::new("Science Building", 3, "X-1", RoomType::LaboratoryRoom, 6);

        RoomService::save(&db, None, first).await.unwrap();
        assert!(RoomService::save(&db, None, second).await.is_err());
        assert_eq!(RoomService::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_facility() {
        let db = test_db().await;

        let with_wifi = [
            NewRoom::new("Main Library", 2, "LIB-201", RoomType::QuietRoom, 20)
                .with_facilities(["WiFi", "AC"]),
            NewRoom::new("Student Center", 1, "SC-101", RoomType::DiscussionRoom, 8)
                .with_facilities(["Projector", "WiFi"]),
        ];
        let without_wifi = NewRoom::new("Science Building", 3, "SCI-301", RoomType::LaboratoryRoom, 15)
            .with_facilities(["Lab Equipment"]);

        for room in with_wifi {
            RoomService::save(&db, None, room).await.unwrap();
        }
        RoomService::save(&db, None, without_wifi).await.unwrap();

        let rooms = RoomService::find_by_facility(&db, "WiFi").await.unwrap();
        let mut numbers: Vec<_> = rooms.iter().map(|(r, _)| r.room_number.as_str()).collect();
        numbers.sort();
        assert_eq!(numbers, vec!["LIB-201", "SC-101"]);

        // the joined rows must still carry the full facility set
        let (_, facilities) = rooms
            .iter()
            .find(|(r, _)| r.room_number == "SC-101")
            .unwrap();
        assert_eq!(facilities, &vec!["Projector".to_string(), "WiFi".to_string()]);

        assert!(
            RoomService::find_by_facility(&db, "wifi")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_find_by_building_and_type() {
        let db = test_db().await;
        RoomService::save(&db, None, library_room()).await.unwrap();
        RoomService::save(
            &db,
            None,
            NewRoom::new("Main Library", 3, "LIB-301", RoomType::DiscussionRoom, 6),
        )
        .await
        .unwrap();

        assert_eq!(
            RoomService::find_by_building(&db, "Main Library")
                .await
                .unwrap()
                .len(),
            2
        );
        assert!(
            RoomService::find_by_building(&db, "main library")
                .await
                .unwrap()
                .is_empty()
        );

        let discussion = RoomService::find_by_type(&db, "DISCUSSION_ROOM").await.unwrap();
        assert_eq!(discussion.len(), 1);
        assert_eq!(discussion[0].0.room_number, "LIB-301");

        assert!(RoomService::find_by_type(&db, "STUDIO").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_existing_room() {
        let db = test_db().await;
        let (saved, _) = RoomService::save(&db, None, library_room()).await.unwrap();

        let replacement = NewRoom::new("Main Library", 4, "LIB-401", RoomType::DiscussionRoom, 10)
            .with_facilities(["Whiteboard", "Whiteboard"]);
        let (replaced, facilities) = RoomService::save(&db, Some(saved.id), replacement)
            .await
            .unwrap();

        assert_eq!(replaced.id, saved.id);
        assert_eq!(replaced.floor, 4);
        assert_eq!(replaced.room_number, "LIB-401");
        assert_eq!(facilities, vec!["Whiteboard"]);
        assert_eq!(RoomService::count(&db).await.unwrap(), 1);

        let (_, stored) = RoomService::find_by_id(&db, saved.id).await.unwrap().unwrap();
        assert_eq!(stored, vec!["Whiteboard"]);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts() {
        let db = test_db().await;
        let (saved, _) = RoomService::save(&db, Some(999), library_room()).await.unwrap();

        assert_ne!(saved.id, 999);
        assert_eq!(RoomService::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_room_is_noop() {
        let db = test_db().await;
        RoomService::save(&db, None, library_room()).await.unwrap();

        RoomService::delete_by_id(&db, 12345).await.unwrap();
        assert_eq!(RoomService::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_seats() {
        let db = test_db().await;
        let (room, _) = RoomService::save(&db, None, library_room()).await.unwrap();
        let (other, _) = RoomService::save(
            &db,
            None,
            NewRoom::new("Student Center", 1, "SC-101", RoomType::DiscussionRoom, 8),
        )
        .await
        .unwrap();

        SeatService::save(&db, None, NewSeat::new("A1", room.id, "Front Row"))
            .await
            .unwrap();
        SeatService::save(&db, None, NewSeat::new("D1", other.id, "Near Screen"))
            .await
            .unwrap();

        RoomService::delete_by_id(&db, room.id).await.unwrap();

        assert!(RoomService::find_by_id(&db, room.id).await.unwrap().is_none());
        assert!(SeatService::find_by_room_id(&db, room.id).await.unwrap().is_empty());
        assert_eq!(SeatService::count(&db).await.unwrap(), 1);
        assert!(
            RoomService::find_by_facility(&db, "WiFi")
                .await
                .unwrap()
                .is_empty()
        );
    }
}
