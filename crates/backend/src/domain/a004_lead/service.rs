use crate::shared::data::RecordCollection;
use crate::shared::lifecycle::ActionError;
use contracts::domain::a004_lead::aggregate::{Lead, LeadId, LeadStatus};
use contracts::domain::common::TransitionMeta;

/// Взять новый лид в работу
pub async fn follow(
    leads: &mut RecordCollection<Lead>,
    id: LeadId,
    meta: TransitionMeta,
) -> Result<Lead, ActionError> {
    leads.transition(id, LeadStatus::Following, meta, None).await
}

/// Отель подключился
pub async fn convert(
    leads: &mut RecordCollection<Lead>,
    id: LeadId,
    meta: TransitionMeta,
) -> Result<Lead, ActionError> {
    leads.transition(id, LeadStatus::Converted, meta, None).await
}

pub async fn fail(
    leads: &mut RecordCollection<Lead>,
    id: LeadId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<Lead, ActionError> {
    leads
        .transition(id, LeadStatus::Failed, meta.with_reason(reason), None)
        .await
}

/// Отбросить спам или дубликат
pub async fn invalidate(
    leads: &mut RecordCollection<Lead>,
    id: LeadId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<Lead, ActionError> {
    leads
        .transition(id, LeadStatus::Invalid, meta.with_reason(reason), None)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_lead::repository;
    use crate::shared::data::mock::{InMemoryPersistence, TracingNotifier};
    use std::sync::Arc;

    async fn leads() -> RecordCollection<Lead> {
        RecordCollection::load(
            Arc::new(repository::mock_source()),
            Arc::new(InMemoryPersistence::new()),
            Arc::new(TracingNotifier),
        )
        .await
        .unwrap()
    }

    fn id_of(leads: &RecordCollection<Lead>, code: &str) -> LeadId {
        leads
            .records()
            .iter()
            .find(|l| l.base.code == code)
            .map(|l| l.base.id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_follow_then_convert() {
        let mut leads = leads().await;
        let id = id_of(&leads, "LD-0001");

        follow(&mut leads, id, TransitionMeta::new().with_operator("sales_li"))
            .await
            .unwrap();
        let converted = convert(&mut leads, id, TransitionMeta::new().with_note("签约两年"))
            .await
            .unwrap();

        assert_eq!(converted.status, LeadStatus::Converted);
        let steps: Vec<_> = converted.history.iter().map(|c| (c.from, c.to)).collect();
        assert_eq!(
            steps,
            vec![
                (LeadStatus::Pending, LeadStatus::Following),
                (LeadStatus::Following, LeadStatus::Converted),
            ]
        );
    }

    #[tokio::test]
    async fn test_following_lead_cannot_be_invalidated() {
        let mut leads = leads().await;
        let id = id_of(&leads, "LD-0002");

        assert!(invalidate(&mut leads, id, "duplicate", TransitionMeta::new()).await.is_err());
        let failed = fail(&mut leads, id, "预算不足", TransitionMeta::new()).await.unwrap();
        assert_eq!(failed.history[0].meta.reason.as_deref(), Some("预算不足"));
    }

    #[tokio::test]
    async fn test_closed_leads_are_terminal() {
        let mut leads = leads().await;
        for code in ["LD-0004", "LD-0005", "LD-0006"] {
            let id = id_of(&leads, code);
            let err = follow(&mut leads, id, TransitionMeta::new()).await.unwrap_err();
            assert!(matches!(err, ActionError::InvalidTransition(_)));
        }
    }
}
