//! `?page=N` handling and the list envelope.

use pixgram_core::domain::{Page, PageRequest};
use pixgram_shared::Paginated;
use pixgram_shared::dto::PageQuery;

use crate::middleware::error::AppError;

const INVALID_PAGE: &str = "Invalid page.";

/// Parse the requested page. Absent or empty means the first page.
pub fn page_request(query: &PageQuery, size: u64) -> Result<PageRequest, AppError> {
    match query.page.as_deref().map(str::trim) {
        None | Some("") => Ok(PageRequest::first(size)),
        Some(raw) => raw
            .parse::<u64>()
            .ok()
            .and_then(|number| PageRequest::new(number, size))
            .ok_or_else(|| AppError::NotFound(INVALID_PAGE.to_string())),
    }
}

/// Reject pages past the end of a non-empty result set.
pub fn ensure_in_range<T>(page: &Page<T>) -> Result<(), AppError> {
    if page.is_out_of_range() {
        return Err(AppError::NotFound(INVALID_PAGE.to_string()));
    }
    Ok(())
}

/// Wrap already-represented `results` with the counts and links of `page`.
pub fn envelope<T, U>(page: &Page<T>, results: Vec<U>) -> Paginated<U> {
    Paginated {
        count: page.total,
        next: page.next_page(),
        previous: page.previous_page(),
        results,
    }
}
