use crate::shared::list::{FieldValue, Searchable};
use contracts::domain::a004_lead::aggregate::Lead;
use contracts::domain::common::Lifecycle;

impl Searchable for Lead {
    fn search_fields() -> &'static [&'static str] {
        &["contact_name", "phone", "company", "city"]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "code" => FieldValue::text(&self.base.code),
            "contact_name" => FieldValue::text(&self.contact_name),
            "phone" => FieldValue::text(&self.phone),
            "company" => FieldValue::text(&self.company),
            "city" => FieldValue::opt_text(self.city.as_deref()),
            "source" => FieldValue::text(self.source.code()),
            "owner" => FieldValue::opt_text(self.owner.as_deref()),
            "room_count" => FieldValue::opt_int(self.room_count),
            "status" => FieldValue::text(self.status.code()),
            "created_at" => FieldValue::timestamp(&self.base.metadata.created_at),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a004_lead::repository;
    use crate::shared::list::{apply_filters, render};
    use contracts::shared::list::{FilterSet, SortKey, ViewState};

    #[test]
    fn test_chinese_name_search_ignores_ascii_variants() {
        let leads = repository::mock_records();
        assert!(leads.iter().any(|l| l.contact_name == "ZhangSan"));
        assert!(leads.iter().any(|l| l.contact_name == "zhangsan"));

        let view = apply_filters(&leads, "张三", &FilterSet::new());
        assert_eq!(view.total(), 1);
        assert_eq!(view.items()[0].contact_name, "张三");

        // The ASCII spelling still matches both variants case-insensitively
        assert_eq!(apply_filters(&leads, "ZHANGSAN", &FilterSet::new()).total(), 2);
    }

    #[test]
    fn test_unassigned_leads_sort_first() {
        let leads = repository::mock_records();
        let state = ViewState::new(100).with_sort(SortKey::asc("owner"));
        let page = render(&leads, &state).unwrap();

        let owners: Vec<_> = page.items.iter().map(|l| l.owner.is_some()).collect();
        let first_assigned = owners.iter().position(|o| *o).unwrap();
        assert!(owners[first_assigned..].iter().all(|o| *o));
    }

    #[test]
    fn test_room_count_sort_desc_puts_missing_last() {
        let leads = repository::mock_records();
        let state = ViewState::new(100).with_sort(SortKey::desc("room_count"));
        let page = render(&leads, &state).unwrap();
        assert_eq!(page.items[0].room_count, Some(120));
        assert_eq!(page.items.last().and_then(|l| l.room_count), None);
    }

    #[test]
    fn test_city_filter_skips_leads_without_city() {
        let leads = repository::mock_records();
        let filters = FilterSet::new().with_eq("city", Some("杭州".into()));
        let view = apply_filters(&leads, "", &filters);
        assert!(view.items().iter().all(|l| l.city.as_deref() == Some("杭州")));
        assert_eq!(view.total(), 2);
    }
}
