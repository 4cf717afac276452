use super::{apply_filters, pagination, sort, ListError, Searchable};
use contracts::shared::list::{Page, ViewState};

/// Full list pipeline for one page render: filter, then sort, then slice.
///
/// Recomputed from the whole collection on every state change; nothing is
/// cached between renders. When the filtered set has shrunk below the
/// requested page (e.g. after a status change), page 1 is rendered and
/// reported in `Page::page`.
pub fn render<T: Searchable + Clone>(records: &[T], state: &ViewState) -> Result<Page<T>, ListError> {
    let filtered = apply_filters(records, &state.query, &state.filters);
    let sorted = sort::sort_by_key(filtered, state.sort.as_ref());
    if state.page == 0 || state.page_size == 0 {
        return Err(ListError::InvalidPage {
            page: state.page,
            page_size: state.page_size,
        });
    }
    let current = state.page_within(sorted.total());
    if current != state.page {
        tracing::debug!("Page {} is past the end, showing page {}", state.page, current);
    }
    let page = pagination::project(&sorted, current, state.page_size)?;

    tracing::debug!(
        "Rendered page {}/{} ({} of {} rows, {} in collection)",
        page.page,
        page.total_pages,
        page.items.len(),
        page.total,
        records.len()
    );

    Ok(page)
}
