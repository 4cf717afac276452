use crate::shared::list::{FieldValue, Searchable};
use contracts::domain::a006_promotion::aggregate::Promotion;
use contracts::domain::common::Lifecycle;

impl Searchable for Promotion {
    fn search_fields() -> &'static [&'static str] {
        &["code", "name", "hotel_name"]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "code" => FieldValue::text(&self.base.code),
            "name" => FieldValue::text(&self.name),
            "hotel_name" => FieldValue::text(&self.hotel_name),
            "promotion_type" => FieldValue::text(&self.promotion_type),
            "start_date" => FieldValue::date(self.start_date),
            "end_date" => FieldValue::date(self.end_date),
            "budget" => FieldValue::Float(self.budget),
            "spent" => FieldValue::Float(self.stats.spent),
            "impressions" => FieldValue::Int(self.stats.impressions),
            "clicks" => FieldValue::Int(self.stats.clicks),
            "orders" => FieldValue::Int(self.stats.orders),
            "ctr" => self.stats.ctr().map_or(FieldValue::Missing, FieldValue::Float),
            "conversion_rate" => self
                .stats
                .conversion_rate()
                .map_or(FieldValue::Missing, FieldValue::Float),
            "status" => FieldValue::text(self.status.code()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a006_promotion::repository;
    use crate::shared::list::{apply_filters, render};
    use chrono::NaiveDate;
    use contracts::shared::list::{FilterSet, SortKey, ViewState};

    #[test]
    fn test_start_date_range() {
        let promotions = repository::mock_records();
        let filters = FilterSet::new().with_date_range(
            "start_date",
            NaiveDate::from_ymd_opt(2024, 5, 1),
            None,
        );
        let view = apply_filters(&promotions, "", &filters);
        assert!(!view.is_empty());
        assert!(view
            .items()
            .iter()
            .all(|p| p.start_date >= NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    }

    #[test]
    fn test_sort_by_ctr_desc_puts_unlaunched_last() {
        let promotions = repository::mock_records();
        let state = ViewState::new(100).with_sort(SortKey::desc("ctr"));
        let page = render(&promotions, &state).unwrap();

        let ctrs: Vec<Option<f64>> = page.items.iter().map(|p| p.stats.ctr()).collect();
        let launched = ctrs.iter().take_while(|c| c.is_some()).count();
        assert!(ctrs[launched..].iter().all(Option::is_none));
        for pair in ctrs[..launched].windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
