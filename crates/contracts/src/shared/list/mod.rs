//! List request/response DTOs shared by every list page: filters, sort
//! key, page slice and the view state that threads them together.

pub mod filter;
pub mod page;
pub mod sort;
pub mod view_state;

pub use filter::{FilterPredicate, FilterSet, FilterValue};
pub use page::Page;
pub use sort::{SortDirection, SortKey};
pub use view_state::ViewState;
