use serde::{Deserialize, Serialize};

/// Page slice of a filtered, sorted list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page index
    pub page: usize,
    pub page_size: usize,
    /// Filtered length before slicing
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based index of the first row on this page, 0 when empty
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}
