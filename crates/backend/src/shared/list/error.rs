use thiserror::Error;

/// Errors of the list pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Invalid page request: page {page}, page size {page_size} (both must be >= 1)")]
    InvalidPage { page: usize, page_size: usize },
}
