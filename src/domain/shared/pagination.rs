use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 1-based page request used by the list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

impl PageRequest {
    pub fn offset(&self, page_size: i64) -> i64 {
        (self.page - 1) * page_size
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + page_size - 1) / page_size
        };
        Self {
            items,
            current_page: page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_previous: page > 1 && total_pages > 0,
        }
    }
}
