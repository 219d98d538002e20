use crate::services::{room::RoomService, seat::SeatService};
use log::info;
use models::{room::NewRoom, room_type::RoomType, seat::NewSeat};
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};

/// Laboratory seats from this number on start out unavailable
const LAB_FIRST_UNAVAILABLE: i32 = 13;

const DISCUSSION_POSITIONS: [&str; 4] = ["Near Screen", "Center Table", "Window Side", "Door Side"];

/// Inserts the sample rooms and seats when the catalog has no rooms yet
///
/// Returns whether any data was written.
pub async fn seed_if_empty<C: ConnectionTrait + TransactionTrait>(db: &C) -> Result<bool, DbErr> {
    if RoomService::count(db).await? > 0 {
        return Ok(false);
    }

    let txn = db.begin().await?;

    // Quiet study room
    let (quiet, _) = RoomService::save(
        &txn,
        None,
        NewRoom::new("Main Library", 2, "LIB-201", RoomType::QuietRoom, 20).with_facilities([
            "WiFi",
            "AC",
            "Power Outlets",
            "Reading Lamps",
        ]),
    )
    .await?;

    for i in 1..=20 {
        let row = match i {
            1..=5 => "Front Row",
            6..=10 => "Middle Row",
            _ => "Back Row",
        };
        SeatService::save(
            &txn,
            None,
            NewSeat::new(format!("A{i}"), quiet.id, format!("{row} - Near Outlets")),
        )
        .await?;
    }

    // Discussion room
    let (discussion, _) = RoomService::save(
        &txn,
        None,
        NewRoom::new("Student Center", 1, "SC-101", RoomType::DiscussionRoom, 8).with_facilities(
            ["WiFi", "AC", "Projector", "Whiteboard"],
        ),
    )
    .await?;

    for i in 1..=8 {
        let position = DISCUSSION_POSITIONS[(i - 1) % DISCUSSION_POSITIONS.len()];
        SeatService::save(
            &txn,
            None,
            NewSeat::new(format!("D{i}"), discussion.id, position),
        )
        .await?;
    }

    // Laboratory
    let (lab, _) = RoomService::save(
        &txn,
        None,
        NewRoom::new("Science Building", 3, "SCI-301", RoomType::LaboratoryRoom, 15)
            .with_facilities([
                "WiFi",
                "AC",
                "Lab Equipment",
                "Chemical Hood",
                "Safety Equipment",
            ]),
    )
    .await?;

    for i in 1..=15 {
        let position = if i <= 5 {
            format!("Lab Station {i}")
        } else {
            format!("Computer Station {}", i - 5)
        };
        let seat = NewSeat::new(format!("L{i}"), lab.id, position);
        let seat = if i >= LAB_FIRST_UNAVAILABLE {
            seat.unavailable()
        } else {
            seat
        };
        SeatService::save(&txn, None, seat).await?;
    }

    txn.commit().await?;

    info!("Sample catalog data created: 3 rooms, 43 seats");
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn test_seed_creates_sample_catalog() {
        let db = test_db().await;

        assert!(seed_if_empty(&db).await.unwrap());
        assert_eq!(RoomService::count(&db).await.unwrap(), 3);
        assert_eq!(SeatService::count(&db).await.unwrap(), 43);

        let (lab, facilities) = RoomService::find_by_room_number(&db, "SCI-301")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(lab.room_type, RoomType::LaboratoryRoom);
        assert_eq!(facilities.len(), 5);

        let lab_seats = SeatService::find_by_room_id(&db, lab.id).await.unwrap();
        assert_eq!(lab_seats.len(), 15);
        let unavailable: Vec<_> = lab_seats
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.seat_number.as_str())
            .collect();
        assert_eq!(unavailable, vec!["L13", "L14", "L15"]);

        let available = SeatService::find_available_by_room_id(&db, lab.id)
            .await
            .unwrap();
        assert_eq!(available.len(), 12);

        let (quiet, _) = RoomService::find_by_room_number(&db, "LIB-201")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            SeatService::find_by_room_id(&db, quiet.id).await.unwrap().len(),
            20
        );

        let d5 = SeatService::find_by_room_id_and_seat_number(
            &db,
            RoomService::find_by_room_number(&db, "SC-101")
                .await
                .unwrap()
                .unwrap()
                .0
                .id,
            "D5",
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(d5.position_description.as_deref(), Some("Near Screen"));
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_catalog() {
        let db = test_db().await;
        RoomService::save(
            &db,
            None,
            NewRoom::new("Main Library", 1, "LIB-101", RoomType::QuietRoom, 4),
        )
        .await
        .unwrap();

        assert!(!seed_if_empty(&db).await.unwrap());
        assert_eq!(RoomService::count(&db).await.unwrap(), 1);
        assert_eq!(SeatService::count(&db).await.unwrap(), 0);
    }
}
