use super::{FieldValue, Searchable};
use crate::shared::date_utils;
use contracts::shared::list::{FilterPredicate, FilterSet, FilterValue};

/// Ordered subsequence of a record collection that passed every active
/// filter. Input order is preserved until an explicit sort is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<T> {
    items: Vec<T>,
}

impl<T> FilteredView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Filtered length, shown as "N total"
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for FilteredView<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Records matching the free-text query and every active filter, in input
/// order. The input is left untouched.
///
/// An empty (or whitespace-only) query and an empty filter set match
/// everything.
pub fn apply_filters<T: Searchable + Clone>(
    records: &[T],
    query: &str,
    filters: &FilterSet,
) -> FilteredView<T> {
    let query = query.trim().to_lowercase();
    let predicates: Vec<&FilterPredicate> = filters.active().collect();

    let items = records
        .iter()
        .filter(|record| query.is_empty() || record.matches_query(&query))
        .filter(|record| predicates.iter().all(|p| matches_predicate(*record, p)))
        .cloned()
        .collect();

    FilteredView::new(items)
}

/// Whether a record satisfies a single filter dimension
pub fn matches_predicate<T: Searchable>(record: &T, predicate: &FilterPredicate) -> bool {
    if !predicate.is_active() {
        return true;
    }
    let value = record.field_value(predicate.field());
    match predicate {
        FilterPredicate::AnyOf { values, .. } => {
            values.iter().any(|accepted| value_equals(&value, accepted))
        }
        FilterPredicate::DateRange { from, to, .. } => {
            let date = match &value {
                FieldValue::Date(dt) => Some(dt.date()),
                FieldValue::Text(text) => date_utils::parse_date(text),
                _ => None,
            };
            match date {
                Some(date) => {
                    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
                }
                None => false,
            }
        }
    }
}

/// Exact equality between a field value and an accepted filter value.
/// Numbers compare numerically, never as substrings; a missing field never
/// matches.
fn value_equals(value: &FieldValue<'_>, accepted: &FilterValue) -> bool {
    match (value, accepted) {
        (FieldValue::Missing, _) => false,
        (FieldValue::Text(text), FilterValue::Text(expected)) => text == expected,
        (FieldValue::Int(v), FilterValue::Int(expected)) => v == expected,
        (FieldValue::Int(_) | FieldValue::Float(_), FilterValue::Int(_) | FilterValue::Float(_)) => {
            let expected = match accepted {
                FilterValue::Int(v) => *v as f64,
                FilterValue::Float(v) => *v,
                _ => return false,
            };
            value.as_f64() == Some(expected)
        }
        (FieldValue::Bool(v), FilterValue::Bool(expected)) => v == expected,
        (FieldValue::Date(dt), FilterValue::Date(expected)) => dt.date() == *expected,
        (FieldValue::Text(text), FilterValue::Date(expected)) => {
            date_utils::parse_date(text) == Some(*expected)
        }
        _ => false,
    }
}
