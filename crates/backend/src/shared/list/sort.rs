use super::{FieldValue, FilteredView, Searchable};
use contracts::shared::list::{SortDirection, SortKey};
use std::cmp::Ordering;

/// Sort a filtered view by a field.
///
/// The sort is stable in both directions: records with equal keys keep
/// their relative input order.
pub fn sort<T: Searchable>(
    view: FilteredView<T>,
    field: &str,
    direction: SortDirection,
) -> FilteredView<T> {
    let mut items = view.into_items();
    items.sort_by(|a, b| {
        let cmp = compare_values(&a.field_value(field), &b.field_value(field));
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    FilteredView::new(items)
}

/// Apply an optional sort key; `None` keeps insertion order
pub fn sort_by_key<T: Searchable>(view: FilteredView<T>, key: Option<&SortKey>) -> FilteredView<T> {
    match key {
        Some(key) => sort(view, &key.field, key.direction),
        None => view,
    }
}

/// Total order over field values.
///
/// Numbers compare numerically, dates by timestamp, text lexicographically.
/// Missing values behave as the empty string. Values of different kinds are
/// ordered by kind so the order stays total on mixed data.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(y),
        (FieldValue::Int(_) | FieldValue::Float(_), FieldValue::Int(_) | FieldValue::Float(_)) => {
            match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            }
        }
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &FieldValue<'_>) -> u8 {
    match value {
        FieldValue::Missing => 0,
        FieldValue::Text(text) if text.is_empty() => 0,
        FieldValue::Int(_) | FieldValue::Float(_) => 1,
        FieldValue::Date(_) => 2,
        FieldValue::Bool(_) => 3,
        FieldValue::Text(_) => 4,
    }
}
