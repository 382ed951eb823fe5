/// Pagination support for page-based remote searches
///
/// OMDb serves search results in fixed pages; the window tracks which page
/// the session has reached and whether the API reported more results.
use serde::{Deserialize, Serialize};

/// Number of items OMDb returns per search page
pub const OMDB_PAGE_SIZE: u32 = 10;

/// Pagination state for one search session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
    pub total_results: Option<u64>,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: OMDB_PAGE_SIZE,
            total_results: None,
        }
    }
}

impl PageWindow {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Items fetched once `page` has been loaded
    pub fn fetched(&self) -> u64 {
        self.page as u64 * self.page_size as u64
    }

    /// True only while the fetched count is below the reported total
    pub fn has_next(&self) -> bool {
        self.total_results
            .map(|total| total > self.fetched())
            .unwrap_or(false)
    }

    pub fn next_page(&self) -> u32 {
        self.page + 1
    }

    pub fn total_pages(&self) -> u32 {
        match self.total_results {
            Some(total) if self.page_size > 0 => {
                ((total as f64) / (self.page_size as f64)).ceil() as u32
            }
            _ => 0,
        }
    }

    /// Record the outcome of loading `page`
    pub fn loaded(&mut self, page: u32, total_results: Option<u64>) {
        self.page = page;
        self.total_results = total_results;
    }

    /// Start over for a new search term
    pub fn reset(&mut self) {
        *self = Self::new(self.page_size);
    }
}
