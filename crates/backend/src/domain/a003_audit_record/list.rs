use crate::shared::list::{FieldValue, Searchable};
use contracts::domain::a003_audit_record::aggregate::{AuditChangeKind, AuditRecord};
use contracts::domain::common::Lifecycle;

impl Searchable for AuditRecord {
    fn search_fields() -> &'static [&'static str] {
        &["code", "merchant_name", "submitter"]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "code" => FieldValue::text(&self.base.code),
            "merchant_name" => FieldValue::text(&self.merchant_name),
            "submitter" => FieldValue::text(&self.submitter),
            "audit_type" => FieldValue::text(self.audit_type.code()),
            "change_kind" => match self.change_kind() {
                Some(AuditChangeKind::Creation) => FieldValue::text("creation"),
                Some(AuditChangeKind::Update) => FieldValue::text("update"),
                None => FieldValue::Missing,
            },
            "status" => FieldValue::text(self.status.code()),
            "submitted_at" | "created_at" => FieldValue::timestamp(&self.base.metadata.created_at),
            _ => FieldValue::Missing,
        }
    }
}
