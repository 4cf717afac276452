use super::{FilteredView, ListError};
use contracts::shared::list::Page;

/// Slice page `page` (1-based) of `page_size` rows out of a filtered view.
///
/// The slice is `[(page-1)*page_size, page*page_size)` clamped to the view;
/// a page past the end is empty. `total` always reports the filtered length.
pub fn project<T: Clone>(
    view: &FilteredView<T>,
    page: usize,
    page_size: usize,
) -> Result<Page<T>, ListError> {
    if page == 0 || page_size == 0 {
        return Err(ListError::InvalidPage { page, page_size });
    }

    let total = view.total();
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Ok(Page {
        items: view.items()[start..end].to_vec(),
        page,
        page_size,
        total,
        total_pages,
    })
}
