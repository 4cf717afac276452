use crate::shared::data::RecordCollection;
use crate::shared::lifecycle::ActionError;
use contracts::domain::a005_room::aggregate::{Room, RoomId, RoomStatus};
use contracts::domain::common::TransitionMeta;

/// Заселить гостя в свободный номер
pub async fn occupy(
    rooms: &mut RecordCollection<Room>,
    id: RoomId,
    meta: TransitionMeta,
) -> Result<Room, ActionError> {
    rooms.transition(id, RoomStatus::Occupied, meta, None).await
}

/// Вернуть номер в свободные после выезда или ремонта
pub async fn release(
    rooms: &mut RecordCollection<Room>,
    id: RoomId,
    meta: TransitionMeta,
) -> Result<Room, ActionError> {
    rooms.transition(id, RoomStatus::Available, meta, None).await
}

pub async fn maintain(
    rooms: &mut RecordCollection<Room>,
    id: RoomId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<Room, ActionError> {
    rooms
        .transition(id, RoomStatus::Maintenance, meta.with_reason(reason), None)
        .await
}
