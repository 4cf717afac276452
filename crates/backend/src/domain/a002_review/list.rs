use crate::shared::list::{FieldValue, Searchable};
use contracts::domain::a002_review::aggregate::Review;
use contracts::domain::common::Lifecycle;

impl Searchable for Review {
    fn search_fields() -> &'static [&'static str] {
        &["guest_name", "hotel_name", "order_no", "content"]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "code" => FieldValue::text(&self.base.code),
            "guest_name" => FieldValue::text(&self.guest_name),
            "hotel_name" => FieldValue::text(&self.hotel_name),
            "order_no" => FieldValue::opt_text(self.order_no.as_deref()),
            "content" => FieldValue::text(&self.content),
            "reply" => FieldValue::opt_text(self.reply.as_deref()),
            "has_reply" => FieldValue::Bool(self.reply.is_some()),
            "rating" => FieldValue::int(self.rating),
            "status" => FieldValue::text(self.status.code()),
            "created_at" => FieldValue::timestamp(&self.base.metadata.created_at),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a002_review::repository;
    use crate::shared::list::{apply_filters, render};
    use contracts::shared::list::{FilterSet, FilterValue, SortKey, ViewState};

    #[test]
    fn test_low_rating_filter() {
        let reviews = repository::mock_records();
        let filters = FilterSet::new().with_any_of("rating", vec![FilterValue::Int(1), FilterValue::Int(2)]);
        let low = apply_filters(&reviews, "", &filters);
        assert!(!low.is_empty());
        assert!(low.items().iter().all(|r| r.rating <= 2));
    }

    #[test]
    fn test_reviews_without_order_are_missing_not_empty() {
        let reviews = repository::mock_records();
        let filters = FilterSet::new().with_eq("order_no", Some("".into()));
        assert!(apply_filters(&reviews, "", &filters).is_empty());
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let reviews = repository::mock_records();
        let state = ViewState::new(100).with_sort(SortKey::desc("rating"));
        let page = render(&reviews, &state).unwrap();
        let ratings: Vec<i32> = page.items.iter().map(|r| r.rating).collect();
        let mut expected = ratings.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(ratings, expected);

        // Equal ratings keep snapshot order
        let fives: Vec<_> = page.items.iter().filter(|r| r.rating == 5).map(|r| r.base.code.clone()).collect();
        let in_snapshot: Vec<_> = reviews.iter().filter(|r| r.rating == 5).map(|r| r.base.code.clone()).collect();
        assert_eq!(fives, in_snapshot);
    }
}
