use crate::domain::common::{
    AggregateId, AggregateRoot, BadgeVariant, BaseAggregate, EntityMetadata, Lifecycle, Stateful,
    StatusChange,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type of a marketing promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromotionId(pub Uuid);

impl PromotionId {
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

impl AggregateId for PromotionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Promotion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    Pending,
    Active,
    Paused,
    Ended,
    Rejected,
}

impl Lifecycle for PromotionStatus {
    fn all() -> &'static [Self] {
        &[
            PromotionStatus::Pending,
            PromotionStatus::Active,
            PromotionStatus::Paused,
            PromotionStatus::Ended,
            PromotionStatus::Rejected,
        ]
    }

    fn initial() -> Self {
        PromotionStatus::Pending
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            PromotionStatus::Pending => &[PromotionStatus::Active, PromotionStatus::Rejected],
            PromotionStatus::Active => &[PromotionStatus::Paused, PromotionStatus::Ended],
            PromotionStatus::Paused => &[PromotionStatus::Active, PromotionStatus::Ended],
            PromotionStatus::Ended | PromotionStatus::Rejected => &[],
        }
    }

    fn code(&self) -> &'static str {
        match self {
            PromotionStatus::Pending => "pending",
            PromotionStatus::Active => "active",
            PromotionStatus::Paused => "paused",
            PromotionStatus::Ended => "ended",
            PromotionStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PromotionStatus::Pending => "待审核",
            PromotionStatus::Active => "进行中",
            PromotionStatus::Paused => "已暂停",
            PromotionStatus::Ended => "已结束",
            PromotionStatus::Rejected => "已驳回",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            PromotionStatus::Pending => BadgeVariant::Warning,
            PromotionStatus::Active => BadgeVariant::Success,
            PromotionStatus::Paused => BadgeVariant::Primary,
            PromotionStatus::Ended => BadgeVariant::Neutral,
            PromotionStatus::Rejected => BadgeVariant::Error,
        }
    }
}

/// Campaign performance counters shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionStats {
    pub impressions: i64,
    pub clicks: i64,
    pub orders: i64,
    /// Spent budget in yuan
    pub spent: f64,
}

impl PromotionStats {
    /// Click-through rate, percent
    pub fn ctr(&self) -> Option<f64> {
        if self.impressions == 0 {
            return None;
        }
        Some(self.clicks as f64 / self.impressions as f64 * 100.0)
    }

    /// Orders per click, percent
    pub fn conversion_rate(&self) -> Option<f64> {
        if self.clicks == 0 {
            return None;
        }
        Some(self.orders as f64 / self.clicks as f64 * 100.0)
    }
}

/// Marketing promotion (aggregate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(flatten)]
    pub base: BaseAggregate<PromotionId>,

    pub name: String,
    pub hotel_name: String,
    /// "discount", "coupon", "flash_sale", ...
    pub promotion_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Budget in yuan
    pub budget: f64,
    #[serde(default)]
    pub stats: PromotionStats,
    pub status: PromotionStatus,
    #[serde(default)]
    pub history: Vec<StatusChange<PromotionStatus>>,
}

impl Promotion {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        name: String,
        hotel_name: String,
        promotion_type: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let base = BaseAggregate::created_at(PromotionId::new_v4(), code, name.clone(), created_at);
        Self {
            base,
            name,
            hotel_name,
            promotion_type,
            start_date,
            end_date,
            budget,
            stats: PromotionStats::default(),
            status: PromotionStatus::initial(),
            history: Vec::new(),
        }
    }
}

impl AggregateRoot for Promotion {
    type Id = PromotionId;

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
        if self.name.trim().is_empty() {
            return Err("Promotion name is required".into());
        }
        if self.end_date < self.start_date {
            return Err("End date must not precede start date".into());
        }
        Ok(())
    }

    fn collection_name() -> &'static str {
        "promotion"
    }

    fn element_name() -> &'static str {
        "营销活动"
    }

    fn list_name() -> &'static str {
        "营销推广"
    }
}

impl Stateful for Promotion {
    type Status = PromotionStatus;

    fn status(&self) -> PromotionStatus {
        self.status
    }

    fn history(&self) -> &[StatusChange<PromotionStatus>] {
        &self.history
    }

    fn apply_status_change(&mut self, change: StatusChange<PromotionStatus>) {
        self.status = change.to;
        self.history.push(change);
        self.base.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_rates() {
        let stats = PromotionStats {
            impressions: 1000,
            clicks: 50,
            orders: 5,
            spent: 120.0,
        };
        assert_eq!(stats.ctr(), Some(5.0));
        assert_eq!(stats.conversion_rate(), Some(10.0));
        assert_eq!(PromotionStats::default().ctr(), None);
    }
}
