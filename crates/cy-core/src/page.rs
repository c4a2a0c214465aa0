//! Paging parameters for list and search-result endpoints.

use serde::{Deserialize, Serialize};

/// One page of a paged endpoint. Page numbers start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_size: u32,
    pub page_number: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }

    /// Query string fragment (without the leading `?`).
    #[must_use]
    pub fn query(&self) -> String {
        format!("pageSize={}&pageNumber={}", self.page_size, self.page_number)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(100, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_renders_both_parameters() {
        assert_eq!(PageRequest::new(25, 3).query(), "pageSize=25&pageNumber=3");
    }

    #[test]
    fn default_is_first_page_of_one_hundred() {
        let page = PageRequest::default();
        assert_eq!(page.page_size, 100);
        assert_eq!(page.page_number, 0);
    }
}
