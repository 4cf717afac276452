use super::{FilterSet, FilterValue, SortDirection, SortKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Explicit state of a list page: search text, filters, sort and page.
///
/// Every change that alters the filtered set or its order resets the page
/// to 1, so a narrowed result never renders an empty page past its end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: FilterSet,
    #[serde(default)]
    pub sort: Option<SortKey>,
    /// 1-based page index
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            filters: FilterSet::default(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, field: &str, value: Option<FilterValue>) {
        self.filters.set_eq(field, value);
        self.page = 1;
    }

    pub fn set_filter_any_of(&mut self, field: &str, values: Vec<FilterValue>) {
        self.filters.set_any_of(field, values);
        self.page = 1;
    }

    pub fn set_date_range(&mut self, field: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filters.set_date_range(field, from, to);
        self.page = 1;
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.filters.clear(field);
        self.page = 1;
    }

    /// Drop search text and every filter
    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.filters.clear_all();
        self.page = 1;
    }

    /// `None` restores insertion order
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        self.page = 1;
    }

    /// Header click: the same column flips direction, a new column starts
    /// ascending
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(current) if current.field == field => Some(SortKey {
                field: current.field,
                direction: current.direction.toggled(),
            }),
            _ => Some(SortKey::asc(field)),
        };
        self.page = 1;
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        match &self.sort {
            Some(current) if current.field == field => current.direction.indicator(),
            _ => " ⇅",
        }
    }

    pub fn sort_direction(&self, field: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.field == field)
            .map(|s| s.direction)
    }

    /// Page index is clamped to 1
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Page to show for a filtered set of `total` rows: the current page,
    /// or 1 once the set has shrunk below it
    pub fn page_within(&self, total: usize) -> usize {
        let total_pages = total.div_ceil(self.page_size.max(1));
        if total > 0 && self.page > total_pages {
            1
        } else {
            self.page.max(1)
        }
    }

    /// Move back to page 1 if the current page no longer exists for
    /// `total` rows. Returns whether the page changed.
    pub fn clamp_to(&mut self, total: usize) -> bool {
        let page = self.page_within(total);
        let changed = page != self.page;
        self.page = page;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ViewState {
        let mut state = ViewState::new(10);
        state.set_page(3);
        state
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = on_page_three();
        state.set_query("张");
        assert_eq!(state.page, 1);

        let mut state = on_page_three();
        state.set_filter("status", Some("pending".into()));
        assert_eq!(state.page, 1);

        let mut state = on_page_three();
        state.clear_filter("status");
        assert_eq!(state.page, 1);

        let mut state = on_page_three();
        state.set_date_range("created_at", NaiveDate::from_ymd_opt(2024, 1, 1), None);
        assert_eq!(state.page, 1);

        let mut state = on_page_three();
        state.set_page_size(50);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ViewState::default();
        state.toggle_sort("amount");
        assert_eq!(state.sort, Some(SortKey::asc("amount")));
        state.toggle_sort("amount");
        assert_eq!(state.sort, Some(SortKey::desc("amount")));
        state.toggle_sort("created_at");
        assert_eq!(state.sort, Some(SortKey::asc("created_at")));
        assert_eq!(state.sort_indicator("created_at"), " ▲");
        assert_eq!(state.sort_indicator("amount"), " ⇅");
    }

    #[test]
    fn test_page_is_never_zero() {
        let mut state = ViewState::new(0);
        state.set_page(0);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 1);
    }

    #[test]
    fn test_clamp_to_shrunk_total() {
        let mut state = ViewState::new(2);
        state.set_page(2);

        assert_eq!(state.page_within(3), 2);
        assert!(!state.clamp_to(3));
        assert_eq!(state.page, 2);

        assert_eq!(state.page_within(2), 1);
        assert!(state.clamp_to(2));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_clamp_keeps_page_of_empty_set() {
        let mut state = ViewState::new(10);
        state.set_page(4);
        assert!(!state.clamp_to(0));
        assert_eq!(state.page, 4);
    }

    #[test]
    fn test_deserialize_defaults() {
        let state: ViewState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, ViewState::default());
    }
}
