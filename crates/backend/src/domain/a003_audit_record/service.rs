use crate::shared::data::RecordCollection;
use crate::shared::lifecycle::ActionError;
use contracts::domain::a003_audit_record::aggregate::{AuditRecord, AuditRecordId, AuditStatus};
use contracts::domain::common::TransitionMeta;

/// Принять изменение, отправленное на проверку
pub async fn approve(
    records: &mut RecordCollection<AuditRecord>,
    id: AuditRecordId,
    meta: TransitionMeta,
) -> Result<AuditRecord, ActionError> {
    let record = records.get(&id)?;
    let message = format!(
        "您提交的{}已审核通过",
        record.audit_type.display_name()
    );
    records
        .transition(id, AuditStatus::Approved, meta, Some(message))
        .await
}

/// Отклонить заявку. Мерчант получает причину.
pub async fn reject(
    records: &mut RecordCollection<AuditRecord>,
    id: AuditRecordId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<AuditRecord, ActionError> {
    let record = records.get(&id)?;
    let message = format!(
        "您提交的{}未通过审核，原因：{}",
        record.audit_type.display_name(),
        reason
    );
    records
        .transition(id, AuditStatus::Rejected, meta.with_reason(reason), Some(message))
        .await
}
