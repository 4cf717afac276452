use crate::shared::data::RecordCollection;
use crate::shared::lifecycle::ActionError;
use contracts::domain::a002_review::aggregate::{Review, ReviewId, ReviewStatus};
use contracts::domain::common::TransitionMeta;

/// Опубликовать отзыв
pub async fn approve(
    reviews: &mut RecordCollection<Review>,
    id: ReviewId,
    meta: TransitionMeta,
) -> Result<Review, ActionError> {
    reviews
        .transition(id, ReviewStatus::Approved, meta, None)
        .await
}

/// Отклонить отзыв. Автор получает причину.
pub async fn reject(
    reviews: &mut RecordCollection<Review>,
    id: ReviewId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<Review, ActionError> {
    let hotel_name = reviews.get(&id)?.hotel_name.clone();
    reviews
        .transition(
            id,
            ReviewStatus::Rejected,
            meta.with_reason(reason),
            Some(format!("您对「{}」的评价未通过审核，原因：{}", hotel_name, reason)),
        )
        .await
}

/// Скрыть отзыв со страницы отеля
pub async fn hide(
    reviews: &mut RecordCollection<Review>,
    id: ReviewId,
    meta: TransitionMeta,
) -> Result<Review, ActionError> {
    reviews.transition(id, ReviewStatus::Hidden, meta, None).await
}
