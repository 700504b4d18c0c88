use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One page of a database query response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Drain a paginated query.
///
/// `fetch` is called with `None` first, then with each returned cursor until a
/// page comes back without one. Results are concatenated in page order.
pub fn collect_pages<T, F>(mut fetch: F) -> AppResult<Vec<T>>
where
    F: FnMut(Option<&str>) -> AppResult<Page<T>>,
{
    let mut results = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(cursor.as_deref())?;
        pages += 1;

        debug!(
            page = pages,
            results = page.results.len(),
            has_more = page.has_more,
            "fetched page"
        );

        results.extend(page.results);

        match page.next_cursor.filter(|c| !c.is_empty()) {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(results)
}
