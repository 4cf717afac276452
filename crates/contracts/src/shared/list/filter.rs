use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accepted value of a discrete filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

/// One filter dimension, bound to a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterPredicate {
    /// Field must equal one of `values` (single select is a one-element set)
    AnyOf {
        field: String,
        values: Vec<FilterValue>,
    },
    /// Field date must fall within `[from, to]`, both bounds inclusive
    DateRange {
        field: String,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterPredicate {
    pub fn field(&self) -> &str {
        match self {
            FilterPredicate::AnyOf { field, .. } => field,
            FilterPredicate::DateRange { field, .. } => field,
        }
    }

    /// Inactive predicates impose no constraint
    pub fn is_active(&self) -> bool {
        match self {
            FilterPredicate::AnyOf { values, .. } => !values.is_empty(),
            FilterPredicate::DateRange { from, to, .. } => from.is_some() || to.is_some(),
        }
    }
}

/// Set of filter dimensions, at most one per field, applied conjunctively
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default)]
    predicates: Vec<FilterPredicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-select filter; `None` clears the field
    pub fn with_eq(mut self, field: &str, value: Option<FilterValue>) -> Self {
        self.set_eq(field, value);
        self
    }

    pub fn with_any_of(mut self, field: &str, values: Vec<FilterValue>) -> Self {
        self.set_any_of(field, values);
        self
    }

    pub fn with_date_range(
        mut self,
        field: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        self.set_date_range(field, from, to);
        self
    }

    pub fn set_eq(&mut self, field: &str, value: Option<FilterValue>) {
        match value {
            Some(value) => self.set_any_of(field, vec![value]),
            None => {
                self.clear(field);
            }
        }
    }

    pub fn set_any_of(&mut self, field: &str, values: Vec<FilterValue>) {
        self.put(FilterPredicate::AnyOf {
            field: field.to_string(),
            values,
        });
    }

    pub fn set_date_range(&mut self, field: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.put(FilterPredicate::DateRange {
            field: field.to_string(),
            from,
            to,
        });
    }

    /// Remove the filter on `field`. Returns whether one was present.
    pub fn clear(&mut self, field: &str) -> bool {
        let before = self.predicates.len();
        self.predicates.retain(|p| p.field() != field);
        self.predicates.len() != before
    }

    pub fn clear_all(&mut self) {
        self.predicates.clear();
    }

    pub fn get(&self, field: &str) -> Option<&FilterPredicate> {
        self.predicates.iter().find(|p| p.field() == field)
    }

    /// Active predicates, in the order they were first set
    pub fn active(&self) -> impl Iterator<Item = &FilterPredicate> {
        self.predicates.iter().filter(|p| p.is_active())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    fn put(&mut self, predicate: FilterPredicate) {
        match self
            .predicates
            .iter_mut()
            .find(|p| p.field() == predicate.field())
        {
            Some(existing) => *existing = predicate,
            None => self.predicates.push(predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_same_field() {
        let mut filters = FilterSet::new().with_eq("status", Some("pending".into()));
        filters.set_eq("status", Some("confirmed".into()));
        assert_eq!(
            filters.get("status"),
            Some(&FilterPredicate::AnyOf {
                field: "status".into(),
                values: vec![FilterValue::Text("confirmed".into())],
            })
        );
        assert_eq!(filters.active().count(), 1);
    }

    #[test]
    fn test_set_none_clears_field() {
        let mut filters = FilterSet::new()
            .with_eq("status", Some("pending".into()))
            .with_eq("channel", Some("app".into()));
        filters.set_eq("status", None);
        assert!(filters.get("status").is_none());
        assert_eq!(filters.active().count(), 1);

        filters.set_eq("channel", None);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_none_and_empty_are_inactive() {
        let filters = FilterSet::new()
            .with_eq("status", None)
            .with_any_of("channel", vec![])
            .with_date_range("created_at", None, None);
        assert!(filters.is_empty());
        assert!(filters.get("status").is_none());
    }

    #[test]
    fn test_clear() {
        let mut filters = FilterSet::new().with_eq("rating", Some(5i64.into()));
        assert!(filters.clear("rating"));
        assert!(!filters.clear("rating"));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let filters = FilterSet::new().with_eq("rating", Some(5i64.into()));
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "predicates": [
                    { "kind": "any_of", "field": "rating", "values": [{ "type": "int", "value": 5 }] }
                ]
            })
        );
    }
}
