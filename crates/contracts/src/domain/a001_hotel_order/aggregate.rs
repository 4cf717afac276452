use crate::domain::common::{
    AggregateId, AggregateRoot, BadgeVariant, BaseAggregate, EntityMetadata, Lifecycle, Stateful,
    StatusChange,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type of a hotel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotelOrderId(pub Uuid);

impl HotelOrderId {
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

impl AggregateId for HotelOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl Lifecycle for OrderStatus {
    fn all() -> &'static [Self] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    fn initial() -> Self {
        OrderStatus::Pending
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Completed],
            OrderStatus::Completed | OrderStatus::Cancelled => &[],
        }
    }

    fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "待确认",
            OrderStatus::Confirmed => "已确认",
            OrderStatus::Completed => "已完成",
            OrderStatus::Cancelled => "已取消",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            OrderStatus::Pending => BadgeVariant::Warning,
            OrderStatus::Confirmed => BadgeVariant::Primary,
            OrderStatus::Completed => BadgeVariant::Success,
            OrderStatus::Cancelled => BadgeVariant::Neutral,
        }
    }
}

/// Guest and stay details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOrderStay {
    pub hotel_name: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_count: i32,
}

impl HotelOrderStay {
    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// Hotel order (aggregate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<HotelOrderId>,

    pub guest_name: String,
    pub phone: String,
    pub stay: HotelOrderStay,
    /// Total amount in yuan
    pub amount: f64,
    /// Booking channel ("app", "mini_program", "ota", ...)
    pub channel: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub history: Vec<StatusChange<OrderStatus>>,
}

impl HotelOrder {
    pub fn new_for_insert(
        order_no: String,
        guest_name: String,
        phone: String,
        stay: HotelOrderStay,
        amount: f64,
        channel: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let description = format!("{} / {}", stay.hotel_name, guest_name);
        let base = BaseAggregate::created_at(HotelOrderId::new_v4(), order_no, description, created_at);
        Self {
            base,
            guest_name,
            phone,
            stay,
            amount,
            channel,
            status: OrderStatus::initial(),
            history: Vec::new(),
        }
    }

    pub fn order_no(&self) -> &str {
        &self.base.code
    }
}

impl AggregateRoot for HotelOrder {
    type Id = HotelOrderId;

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
        if self.base.code.trim().is_empty() {
            return Err("Order number is required".into());
        }
        if self.guest_name.trim().is_empty() {
            return Err("Guest name is required".into());
        }
        if self.stay.check_out <= self.stay.check_in {
            return Err("Check-out must be after check-in".into());
        }
        Ok(())
    }

    fn collection_name() -> &'static str {
        "hotel_order"
    }

    fn element_name() -> &'static str {
        "酒店订单"
    }

    fn list_name() -> &'static str {
        "酒店订单"
    }
}

impl Stateful for HotelOrder {
    type Status = OrderStatus;

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn history(&self) -> &[StatusChange<OrderStatus>] {
        &self.history
    }

    fn apply_status_change(&mut self, change: StatusChange<OrderStatus>) {
        self.status = change.to;
        self.history.push(change);
        self.base.touch();
    }
}
