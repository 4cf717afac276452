use crate::domain::common::{
    AggregateId, AggregateRoot, BadgeVariant, BaseAggregate, EntityMetadata, Lifecycle, Stateful,
    StatusChange,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type of a CRM lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub Uuid);

impl LeadId {
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

impl AggregateId for LeadId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Lead status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Pending,
    Following,
    Converted,
    Failed,
    Invalid,
}

impl Lifecycle for LeadStatus {
    fn all() -> &'static [Self] {
        &[
            LeadStatus::Pending,
            LeadStatus::Following,
            LeadStatus::Converted,
            LeadStatus::Failed,
            LeadStatus::Invalid,
        ]
    }

    fn initial() -> Self {
        LeadStatus::Pending
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            LeadStatus::Pending => &[
                LeadStatus::Following,
                LeadStatus::Converted,
                LeadStatus::Failed,
                LeadStatus::Invalid,
            ],
            LeadStatus::Following => &[LeadStatus::Converted, LeadStatus::Failed],
            LeadStatus::Converted | LeadStatus::Failed | LeadStatus::Invalid => &[],
        }
    }

    fn code(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "pending",
            LeadStatus::Following => "following",
            LeadStatus::Converted => "converted",
            LeadStatus::Failed => "failed",
            LeadStatus::Invalid => "invalid",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "待跟进",
            LeadStatus::Following => "跟进中",
            LeadStatus::Converted => "已转化",
            LeadStatus::Failed => "跟进失败",
            LeadStatus::Invalid => "无效线索",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            LeadStatus::Pending => BadgeVariant::Warning,
            LeadStatus::Following => BadgeVariant::Primary,
            LeadStatus::Converted => BadgeVariant::Success,
            LeadStatus::Failed => BadgeVariant::Error,
            LeadStatus::Invalid => BadgeVariant::Neutral,
        }
    }
}

/// Where the lead came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    Referral,
    Exhibition,
    ColdCall,
}

impl LeadSource {
    pub fn code(&self) -> &'static str {
        match self {
            LeadSource::Website => "website",
            LeadSource::Referral => "referral",
            LeadSource::Exhibition => "exhibition",
            LeadSource::ColdCall => "cold_call",
        }
    }
}

/// Merchant acquisition lead (aggregate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(flatten)]
    pub base: BaseAggregate<LeadId>,

    pub contact_name: String,
    pub phone: String,
    pub company: String,
    pub city: Option<String>,
    pub source: LeadSource,
    /// Sales owner assigned to the lead
    pub owner: Option<String>,
    /// Expected number of rooms the merchant brings
    pub room_count: Option<i32>,
    pub status: LeadStatus,
    #[serde(default)]
    pub history: Vec<StatusChange<LeadStatus>>,
}

impl Lead {
    pub fn new_for_insert(
        code: String,
        contact_name: String,
        phone: String,
        company: String,
        source: LeadSource,
        created_at: DateTime<Utc>,
    ) -> Self {
        let description = format!("{} / {}", company, contact_name);
        let base = BaseAggregate::created_at(LeadId::new_v4(), code, description, created_at);
        Self {
            base,
            contact_name,
            phone,
            company,
            city: None,
            source,
            owner: None,
            room_count: None,
            status: LeadStatus::initial(),
            history: Vec::new(),
        }
    }
}

impl AggregateRoot for Lead {
    type Id = LeadId;

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
        if self.contact_name.trim().is_empty() {
            return Err("Contact name is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required".into());
        }
        if self.room_count.is_some_and(|count| count <= 0) {
            return Err("Room count must be positive".into());
        }
        Ok(())
    }

    fn collection_name() -> &'static str {
        "lead"
    }

    fn element_name() -> &'static str {
        "线索"
    }

    fn list_name() -> &'static str {
        "线索管理"
    }
}

impl Stateful for Lead {
    type Status = LeadStatus;

    fn status(&self) -> LeadStatus {
        self.status
    }

    fn history(&self) -> &[StatusChange<LeadStatus>] {
        &self.history
    }

    fn apply_status_change(&mut self, change: StatusChange<LeadStatus>) {
        self.status = change.to;
        self.history.push(change);
        self.base.touch();
    }
}
