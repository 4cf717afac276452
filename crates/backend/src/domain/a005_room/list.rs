use crate::shared::list::{FieldValue, Searchable};
use contracts::domain::a005_room::aggregate::Room;
use contracts::domain::common::Lifecycle;

impl Searchable for Room {
    fn search_fields() -> &'static [&'static str] {
        &["room_no", "room_type", "hotel_name"]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "room_no" => FieldValue::text(&self.room_no),
            "room_type" => FieldValue::text(&self.room_type),
            "hotel_name" => FieldValue::text(&self.hotel_name),
            "floor" => FieldValue::int(self.floor),
            "price" => FieldValue::Float(self.price),
            "max_guests" => FieldValue::int(self.max_guests),
            "status" => FieldValue::text(self.status.code()),
            "updated_at" => FieldValue::timestamp(&self.base.metadata.updated_at),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a005_room::repository;
    use crate::shared::list::{apply_filters, render};
    use contracts::domain::common::Lifecycle;
    use contracts::shared::list::{FilterSet, FilterValue, SortKey, ViewState};

    #[test]
    fn test_floor_filter_is_numeric() {
        let rooms = repository::mock_records();
        // "1" must not match floors 10 or 11
        let view = apply_filters(&rooms, "", &FilterSet::new().with_eq("floor", Some(FilterValue::Int(1))));
        assert!(view.items().iter().all(|r| r.floor == 1));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_sort_by_price_then_page() {
        let rooms = repository::mock_records();
        let mut state = ViewState::new(2).with_sort(SortKey::asc("price"));
        state.set_page(2);
        let page = render(&rooms, &state).unwrap();

        let mut prices: Vec<f64> = rooms.iter().map(|r| r.price).collect();
        prices.sort_by(|a, b| a.total_cmp(b));
        let expected: Vec<f64> = prices[2..4].to_vec();
        let actual: Vec<f64> = page.items.iter().map(|r| r.price).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_available_multi_status_filter() {
        let rooms = repository::mock_records();
        let filters = FilterSet::new().with_any_of(
            "status",
            vec!["available".into(), "maintenance".into()],
        );
        let view = apply_filters(&rooms, "", &filters);
        assert!(view.items().iter().all(|r| r.status.code() != "occupied"));
    }
}
