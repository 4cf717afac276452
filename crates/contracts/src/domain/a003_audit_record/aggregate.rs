use crate::domain::common::{
    AggregateId, AggregateRoot, BadgeVariant, BaseAggregate, EntityMetadata, Lifecycle, Stateful,
    StatusChange,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type of an audit queue item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditRecordId(pub Uuid);

impl AuditRecordId {
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

impl AggregateId for AuditRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Audit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pending,
    Approved,
    Rejected,
}

impl Lifecycle for AuditStatus {
    fn all() -> &'static [Self] {
        &[AuditStatus::Pending, AuditStatus::Approved, AuditStatus::Rejected]
    }

    fn initial() -> Self {
        AuditStatus::Pending
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            AuditStatus::Pending => &[AuditStatus::Approved, AuditStatus::Rejected],
            AuditStatus::Approved | AuditStatus::Rejected => &[],
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "pending",
            AuditStatus::Approved => "approved",
            AuditStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "待审核",
            AuditStatus::Approved => "已通过",
            AuditStatus::Rejected => "已驳回",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            AuditStatus::Pending => BadgeVariant::Warning,
            AuditStatus::Approved => BadgeVariant::Success,
            AuditStatus::Rejected => BadgeVariant::Error,
        }
    }
}

/// What the submitted change touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditType {
    MerchantProfile,
    RoomInfo,
    Promotion,
    Qualification,
}

impl AuditType {
    pub fn code(&self) -> &'static str {
        match self {
            AuditType::MerchantProfile => "merchant_profile",
            AuditType::RoomInfo => "room_info",
            AuditType::Promotion => "promotion",
            AuditType::Qualification => "qualification",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AuditType::MerchantProfile => "商户资料",
            AuditType::RoomInfo => "房型信息",
            AuditType::Promotion => "营销活动",
            AuditType::Qualification => "资质证照",
        }
    }
}

/// Submitted content under review.
///
/// Only `after` is mandatory: a change without `before` is a creation
/// event, one with both is an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditChange {
    #[serde(default)]
    pub before: Option<serde_json::Value>,
    pub after: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditChangeKind {
    Creation,
    Update,
}

impl AuditChange {
    pub fn creation(after: serde_json::Value) -> Self {
        Self { before: None, after }
    }

    pub fn update(before: serde_json::Value, after: serde_json::Value) -> Self {
        Self {
            before: Some(before),
            after,
        }
    }

    pub fn kind(&self) -> AuditChangeKind {
        match self.before {
            Some(_) => AuditChangeKind::Update,
            None => AuditChangeKind::Creation,
        }
    }

    /// Top-level keys of `after` whose value differs from `before`
    pub fn changed_keys(&self) -> Vec<String> {
        let after = match self.after.as_object() {
            Some(obj) => obj,
            None => return Vec::new(),
        };
        let before = self.before.as_ref().and_then(|b| b.as_object());
        after
            .iter()
            .filter(|(key, value)| before.and_then(|b| b.get(*key)) != Some(*value))
            .map(|(key, _)| key.clone())
            .collect()
    }
}

/// Audit queue item (aggregate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(flatten)]
    pub base: BaseAggregate<AuditRecordId>,

    pub audit_type: AuditType,
    pub merchant_name: String,
    pub submitter: String,
    pub change: Option<AuditChange>,
    pub status: AuditStatus,
    #[serde(default)]
    pub history: Vec<StatusChange<AuditStatus>>,
}

impl AuditRecord {
    pub fn new_for_insert(
        code: String,
        audit_type: AuditType,
        merchant_name: String,
        submitter: String,
        change: Option<AuditChange>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let description = format!("{} / {}", audit_type.display_name(), merchant_name);
        let base = BaseAggregate::created_at(AuditRecordId::new_v4(), code, description, created_at);
        Self {
            base,
            audit_type,
            merchant_name,
            submitter,
            change,
            status: AuditStatus::initial(),
            history: Vec::new(),
        }
    }

    pub fn change_kind(&self) -> Option<AuditChangeKind> {
        self.change.as_ref().map(AuditChange::kind)
    }
}

impl AggregateRoot for AuditRecord {
    type Id = AuditRecordId;

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
        if self.merchant_name.trim().is_empty() {
            return Err("Merchant name is required".into());
        }
        if self.submitter.trim().is_empty() {
            return Err("Submitter is required".into());
        }
        Ok(())
    }

    fn collection_name() -> &'static str {
        "audit_record"
    }

    fn element_name() -> &'static str {
        "审核记录"
    }

    fn list_name() -> &'static str {
        "审核队列"
    }
}

impl Stateful for AuditRecord {
    type Status = AuditStatus;

    fn status(&self) -> AuditStatus {
        self.status
    }

    fn history(&self) -> &[StatusChange<AuditStatus>] {
        &self.history
    }

    fn apply_status_change(&mut self, change: StatusChange<AuditStatus>) {
        self.status = change.to;
        self.history.push(change);
        self.base.touch();
    }
}
