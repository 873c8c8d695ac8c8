//! Paginated response envelope for list endpoints

use serde::Serialize;

/// One page of list results with the metadata the legacy API exposed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub docs: Vec<T>,
    pub total_docs: i64,
    pub limit: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Build a page envelope. `total_pages` is ceil(total_docs / limit);
    /// an empty result set still reports one page.
    pub fn new(docs: Vec<T>, total_docs: i64, page: i64, limit: i64) -> Self {
        let total_pages = if total_docs == 0 {
            1
        } else {
            (total_docs + limit - 1) / limit
        };
        Self {
            docs,
            total_docs,
            limit,
            page,
            total_pages,
        }
    }
}
