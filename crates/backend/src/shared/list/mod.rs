//! Generic list pipeline of the back-office pages: free-text search,
//! discrete filters, column sort and page projection over an in-memory
//! record collection.

pub mod error;
pub mod field_value;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;

pub use error::ListError;
pub use field_value::FieldValue;
pub use filter::{apply_filters, FilteredView};
pub use pagination::project;
pub use sort::{compare_values, sort};
pub use view::render;

/// Record type that can be listed: exposes named fields to search, filter
/// and sort on.
pub trait Searchable {
    /// Fields the free-text query is matched against
    fn search_fields() -> &'static [&'static str];

    /// Value of a named field. Unknown fields and empty options are
    /// `FieldValue::Missing`.
    fn field_value(&self, field: &str) -> FieldValue<'_>;

    /// Case-insensitive substring match of an already lowercased query
    /// against any designated search field
    fn matches_query(&self, query_lower: &str) -> bool {
        Self::search_fields().iter().any(|field| {
            self.field_value(field)
                .search_text()
                .is_some_and(|text| text.to_lowercase().contains(query_lower))
        })
    }
}
