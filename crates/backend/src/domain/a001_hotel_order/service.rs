use crate::shared::data::RecordCollection;
use crate::shared::lifecycle::ActionError;
use contracts::domain::a001_hotel_order::aggregate::{HotelOrder, HotelOrderId, OrderStatus};
use contracts::domain::common::TransitionMeta;

/// Подтвердить заказ в статусе pending
pub async fn confirm(
    orders: &mut RecordCollection<HotelOrder>,
    id: HotelOrderId,
    meta: TransitionMeta,
) -> Result<HotelOrder, ActionError> {
    let order_no = orders.get(&id)?.order_no().to_string();
    orders
        .transition(
            id,
            OrderStatus::Confirmed,
            meta,
            Some(format!("您的订单 {} 已确认，期待您的入住", order_no)),
        )
        .await
}

/// Завершить подтверждённый заказ после выезда гостя
pub async fn complete(
    orders: &mut RecordCollection<HotelOrder>,
    id: HotelOrderId,
    meta: TransitionMeta,
) -> Result<HotelOrder, ActionError> {
    orders
        .transition(
            id,
            OrderStatus::Completed,
            meta,
            None,
        )
        .await
}

/// Отменить заказ в статусе pending. Гость получает причину.
pub async fn cancel(
    orders: &mut RecordCollection<HotelOrder>,
    id: HotelOrderId,
    reason: &str,
    meta: TransitionMeta,
) -> Result<HotelOrder, ActionError> {
    let order_no = orders.get(&id)?.order_no().to_string();
    orders
        .transition(
            id,
            OrderStatus::Cancelled,
            meta.with_reason(reason),
            Some(format!("您的订单 {} 已取消，原因：{}", order_no, reason)),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel_order::repository;
    use crate::shared::data::mock::{InMemoryPersistence, MockRecordSource, RecordingNotifier};
    use contracts::domain::common::AggregateId;
    use std::sync::Arc;

    async fn orders(notifier: Arc<RecordingNotifier>) -> RecordCollection<HotelOrder> {
        RecordCollection::load(
            Arc::new(MockRecordSource::new(repository::mock_records())),
            Arc::new(InMemoryPersistence::new()),
            notifier,
        )
        .await
        .unwrap()
    }

    fn id_with_status(orders: &RecordCollection<HotelOrder>, status: OrderStatus) -> HotelOrderId {
        orders
            .records()
            .iter()
            .find(|o| o.status == status)
            .map(|o| o.base.id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_confirm_then_complete() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut orders = orders(notifier.clone()).await;
        let id = id_with_status(&orders, OrderStatus::Pending);

        let confirmed = confirm(&mut orders, id, TransitionMeta::new().with_operator("front_desk")).await.unwrap();
        assert_eq!(confirmed.status, OrderStatus::Confirmed);
        assert_eq!(confirmed.history[0].meta.operator.as_deref(), Some("front_desk"));

        let completed = complete(&mut orders, id, TransitionMeta::new()).await.unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
        assert_eq!(completed.history.len(), 2);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_notifies_guest_with_reason() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut orders = orders(notifier.clone()).await;
        let id = id_with_status(&orders, OrderStatus::Pending);

        let cancelled = cancel(&mut orders, id, "客人行程变更", TransitionMeta::new()).await.unwrap();
        assert_eq!(cancelled.history[0].meta.reason.as_deref(), Some("客人行程变更"));

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, id.as_string());
        assert!(sent[0].1.contains("客人行程变更"));
    }

    #[tokio::test]
    async fn test_confirmed_order_cannot_be_cancelled() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut orders = orders(notifier.clone()).await;
        let id = id_with_status(&orders, OrderStatus::Confirmed);

        let err = cancel(&mut orders, id, "duplicate", TransitionMeta::new()).await.unwrap_err();
        assert!(matches!(err, ActionError::InvalidTransition(_)));
        assert_eq!(orders.get(&id).unwrap().status, OrderStatus::Confirmed);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_pending_order_cannot_be_completed() {
        let mut orders = orders(Arc::new(RecordingNotifier::new())).await;
        let id = id_with_status(&orders, OrderStatus::Pending);
        assert!(complete(&mut orders, id, TransitionMeta::new()).await.is_err());
    }
}
