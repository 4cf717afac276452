use crate::domain::common::{
    AggregateId, AggregateRoot, BadgeVariant, BaseAggregate, EntityMetadata, Lifecycle, Stateful,
    StatusChange,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for RoomId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Inventory status of a room. Rooms cycle between states and never
/// reach a terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl Lifecycle for RoomStatus {
    fn all() -> &'static [Self] {
        &[RoomStatus::Available, RoomStatus::Occupied, RoomStatus::Maintenance]
    }

    fn initial() -> Self {
        RoomStatus::Available
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            RoomStatus::Available => &[RoomStatus::Occupied, RoomStatus::Maintenance],
            RoomStatus::Occupied => &[RoomStatus::Available],
            RoomStatus::Maintenance => &[RoomStatus::Available],
        }
    }

    fn code(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "空闲",
            RoomStatus::Occupied => "已入住",
            RoomStatus::Maintenance => "维修中",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            RoomStatus::Available => BadgeVariant::Success,
            RoomStatus::Occupied => BadgeVariant::Primary,
            RoomStatus::Maintenance => BadgeVariant::Warning,
        }
    }
}

/// Room inventory item (aggregate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(flatten)]
    pub base: BaseAggregate<RoomId>,

    pub hotel_name: String,
    pub room_no: String,
    pub room_type: String,
    pub floor: i32,
    /// Nightly price in yuan
    pub price: f64,
    pub max_guests: i32,
    pub status: RoomStatus,
    #[serde(default)]
    pub history: Vec<StatusChange<RoomStatus>>,
}

impl Room {
    pub fn new_for_insert(
        hotel_name: String,
        room_no: String,
        room_type: String,
        floor: i32,
        price: f64,
        max_guests: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let code = format!("RM-{}", room_no);
        let description = format!("{} {}", hotel_name, room_no);
        let base = BaseAggregate::created_at(RoomId::new_v4(), code, description, created_at);
        Self {
            base,
            hotel_name,
            room_no,
            room_type,
            floor,
            price,
            max_guests,
            status: RoomStatus::initial(),
            history: Vec::new(),
        }
    }
}

impl AggregateRoot for Room {
    type Id = RoomId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn validate(&self) -> Result<(), String> {
        if self.room_no.trim().is_empty() {
            return Err("Room number is required".into());
        }
        if self.price < 0.0 {
            return Err(format!("Price must not be negative, got {}", self.price));
        }
        if self.max_guests < 1 {
            return Err("Room must fit at least one guest".into());
        }
        Ok(())
    }

    fn collection_name() -> &'static str {
        "room"
    }

    fn element_name() -> &'static str {
        "房间"
    }

    fn list_name() -> &'static str {
        "房态管理"
    }
}

impl Stateful for Room {
    type Status = RoomStatus;

    fn status(&self) -> RoomStatus {
        self.status
    }

    fn history(&self) -> &[StatusChange<RoomStatus>] {
        &self.history
    }

    fn apply_status_change(&mut self, change: StatusChange<RoomStatus>) {
        self.status = change.to;
        self.history.push(change);
        self.base.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_have_no_terminal_state() {
        for status in RoomStatus::all() {
            assert!(!status.is_terminal());
        }
    }
}
