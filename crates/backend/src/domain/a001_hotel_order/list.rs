use crate::shared::list::{FieldValue, Searchable};
use contracts::domain::a001_hotel_order::aggregate::HotelOrder;
use contracts::domain::common::Lifecycle;

impl Searchable for HotelOrder {
    fn search_fields() -> &'static [&'static str] {
        &["order_no", "guest_name", "phone", "hotel_name"]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "order_no" => FieldValue::text(&self.base.code),
            "guest_name" => FieldValue::text(&self.guest_name),
            "phone" => FieldValue::text(&self.phone),
            "hotel_name" => FieldValue::text(&self.stay.hotel_name),
            "room_type" => FieldValue::text(&self.stay.room_type),
            "check_in" => FieldValue::date(self.stay.check_in),
            "check_out" => FieldValue::date(self.stay.check_out),
            "nights" => FieldValue::Int(self.stay.nights()),
            "room_count" => FieldValue::int(self.stay.room_count),
            "amount" => FieldValue::Float(self.amount),
            "channel" => FieldValue::text(&self.channel),
            "status" => FieldValue::text(self.status.code()),
            "created_at" => FieldValue::timestamp(&self.base.metadata.created_at),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a001_hotel_order::repository;
    use crate::shared::lifecycle::attempt_transition;
    use crate::shared::list::{apply_filters, render};
    use contracts::domain::a001_hotel_order::aggregate::OrderStatus;
    use contracts::domain::common::TransitionMeta;
    use contracts::shared::list::{FilterSet, SortKey, ViewState};

    #[test]
    fn test_pending_filter_and_transitions() {
        let orders: Vec<_> = repository::mock_records().into_iter().take(3).collect();
        let statuses: Vec<_> = orders.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![OrderStatus::Pending, OrderStatus::Confirmed, OrderStatus::Cancelled]
        );

        let pending = apply_filters(&orders, "", &FilterSet::new().with_eq("status", Some("pending".into())));
        assert_eq!(pending.items(), &orders[..1]);

        assert!(attempt_transition(&orders[2], OrderStatus::Confirmed, TransitionMeta::new()).is_err());

        let confirmed =
            attempt_transition(&orders[0], OrderStatus::Confirmed, TransitionMeta::new()).unwrap();
        assert_eq!(confirmed.status, OrderStatus::Confirmed);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_sort_by_check_in_desc() {
        let orders = repository::mock_records();
        let state = ViewState::new(3).with_sort(SortKey::desc("check_in"));
        let page = render(&orders, &state).unwrap();
        let codes: Vec<_> = page.items.iter().map(|o| o.base.code.as_str()).collect();
        assert_eq!(codes, vec!["HO-2024-0008", "HO-2024-0007", "HO-2024-0006"]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_search_by_phone_and_hotel() {
        let orders = repository::mock_records();
        assert_eq!(apply_filters(&orders, "13800138001", &FilterSet::new()).total(), 1);
        assert_eq!(apply_filters(&orders, "西湖", &FilterSet::new()).total(), 3);
        assert_eq!(apply_filters(&orders, "zhang wei", &FilterSet::new()).total(), 1);
    }
}
