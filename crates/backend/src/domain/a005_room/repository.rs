use crate::shared::data::mock::MockRecordSource;
use crate::shared::date_utils::utc_at;
use contracts::domain::a005_room::aggregate::{Room, RoomId, RoomStatus};
use once_cell::sync::Lazy;
use uuid::Uuid;

fn room(
    n: u128,
    room_no: &str,
    room_type: &str,
    floor: i32,
    price: f64,
    max_guests: i32,
    status: RoomStatus,
) -> Room {
    let mut room = Room::new_for_insert(
        "西湖国宾馆".to_string(),
        room_no.to_string(),
        room_type.to_string(),
        floor,
        price,
        max_guests,
        utc_at(2023, 12, 1, 8, 0),
    );
    room.base.id = RoomId::new(Uuid::from_u128(0xa005_0000 + n));
    room.status = status;
    room
}

static ROOMS: Lazy<Vec<Room>> = Lazy::new(|| {
    vec![
        room(1, "101", "标准双床房", 1, 488.0, 2, RoomStatus::Available),
        room(2, "102", "标准双床房", 1, 488.0, 2, RoomStatus::Occupied),
        room(3, "108", "无障碍客房", 1, 458.0, 2, RoomStatus::Maintenance),
        room(4, "1001", "豪华大床房", 10, 688.0, 2, RoomStatus::Available),
        room(5, "1002", "豪华大床房", 10, 688.0, 2, RoomStatus::Occupied),
        room(6, "1101", "行政套房", 11, 1280.0, 3, RoomStatus::Available),
        room(7, "1108", "家庭房", 11, 928.0, 4, RoomStatus::Available),
    ]
});

/// Static room snapshot the console starts from
pub fn mock_records() -> Vec<Room> {
    ROOMS.clone()
}

pub fn mock_source() -> MockRecordSource<Room> {
    MockRecordSource::new(mock_records())
}
