use crate::shared::data::RecordCollection;
use crate::shared::lifecycle::ActionError;
use contracts::domain::a006_promotion::aggregate::{Promotion, PromotionId, PromotionStatus};
use contracts::domain::common::TransitionMeta;

/// Одобрить акцию или возобновить приостановленную
pub async fn activate(
    promotions: &mut RecordCollection<Promotion>,
    id: PromotionId,
    meta: TransitionMeta,
) -> Result<Promotion, ActionError> {
    promotions
        .transition(id, PromotionStatus::Active, meta, None)
        .await
}

/// Отклонить акцию. Мерчант получает причину.
pub async fn reject(
    promotions: &mut RecordCollection<Promotion>,
    id: PromotionId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<Promotion, ActionError> {
    let name = promotions.get(&id)?.name.clone();
    promotions
        .transition(
            id,
            PromotionStatus::Rejected,
            meta.with_reason(reason),
            Some(format!("您的推广活动「{}」未通过审核，原因：{}", name, reason)),
        )
        .await
}

pub async fn pause(
    promotions: &mut RecordCollection<Promotion>,
    id: PromotionId,
    meta: TransitionMeta,
) -> Result<Promotion, ActionError> {
    promotions
        .transition(id, PromotionStatus::Paused, meta, None)
        .await
}

pub async fn end(
    promotions: &mut RecordCollection<Promotion>,
    id: PromotionId,
    meta: TransitionMeta,
) -> Result<Promotion, ActionError> {
    promotions
        .transition(id, PromotionStatus::Ended, meta, None)
        .await
}
