use crate::domain::common::{
    AggregateId, AggregateRoot, BadgeVariant, BaseAggregate, EntityMetadata, Lifecycle, Stateful,
    StatusChange,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type of a guest review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
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

impl AggregateId for ReviewId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Moderation status of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
    Hidden,
}

impl Lifecycle for ReviewStatus {
    fn all() -> &'static [Self] {
        &[
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
            ReviewStatus::Hidden,
        ]
    }

    fn initial() -> Self {
        ReviewStatus::Pending
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            ReviewStatus::Pending => &[
                ReviewStatus::Approved,
                ReviewStatus::Rejected,
                ReviewStatus::Hidden,
            ],
            // A published review can still be taken down
            ReviewStatus::Approved => &[ReviewStatus::Hidden],
            ReviewStatus::Rejected | ReviewStatus::Hidden => &[],
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
            ReviewStatus::Hidden => "hidden",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "待审核",
            ReviewStatus::Approved => "已通过",
            ReviewStatus::Rejected => "已拒绝",
            ReviewStatus::Hidden => "已隐藏",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            ReviewStatus::Pending => BadgeVariant::Warning,
            ReviewStatus::Approved => BadgeVariant::Success,
            ReviewStatus::Rejected => BadgeVariant::Error,
            ReviewStatus::Hidden => BadgeVariant::Neutral,
        }
    }
}

/// Guest review of a hotel stay (aggregate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub base: BaseAggregate<ReviewId>,

    pub hotel_name: String,
    pub guest_name: String,
    /// Related order number, if the review was left after a booking
    pub order_no: Option<String>,
    /// Rating, 1..=5
    pub rating: i32,
    pub content: String,
    /// Merchant reply
    pub reply: Option<String>,
    pub status: ReviewStatus,
    #[serde(default)]
    pub history: Vec<StatusChange<ReviewStatus>>,
}

impl Review {
    pub fn new_for_insert(
        code: String,
        hotel_name: String,
        guest_name: String,
        order_no: Option<String>,
        rating: i32,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let description = content.chars().take(40).collect();
        let base = BaseAggregate::created_at(ReviewId::new_v4(), code, description, created_at);
        Self {
            base,
            hotel_name,
            guest_name,
            order_no,
            rating,
            content,
            reply: None,
            status: ReviewStatus::initial(),
            history: Vec::new(),
        }
    }
}

impl AggregateRoot for Review {
    type Id = ReviewId;

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
        if !(1..=5).contains(&self.rating) {
            return Err(format!("Rating must be between 1 and 5, got {}", self.rating));
        }
        if self.content.trim().is_empty() {
            return Err("Review content is required".into());
        }
        Ok(())
    }

    fn collection_name() -> &'static str {
        "review"
    }

    fn element_name() -> &'static str {
        "评价"
    }

    fn list_name() -> &'static str {
        "评价管理"
    }
}

impl Stateful for Review {
    type Status = ReviewStatus;

    fn status(&self) -> ReviewStatus {
        self.status
    }

    fn history(&self) -> &[StatusChange<ReviewStatus>] {
        &self.history
    }

    fn apply_status_change(&mut self, change: StatusChange<ReviewStatus>) {
        self.status = change.to;
        self.history.push(change);
        self.base.touch();
    }
}
