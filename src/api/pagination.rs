//! Page-numbered collection queries

use crate::config::api;

/// A paginated list endpoint plus its query parameters
///
/// Pages are 1-indexed. The server marks "more pages may follow" only by
/// returning exactly [`api::PAGE_SIZE`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    path: String,
    key: String,
    params: Vec<(String, String)>,
    start_page: u32,
}

impl CollectionQuery {
    /// Query for `path`, whose records live under `key` in each page body
    pub fn new(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            params: Vec::new(),
            start_page: 1,
        }
    }

    /// Add a query parameter; the value is percent-encoded
    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params
            .push((name.to_string(), urlencoding::encode(value).into_owned()));
        self
    }

    /// Begin pagination at `page` instead of 1
    pub fn starting_at(mut self, page: u32) -> Self {
        self.start_page = page.max(1);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn start_page(&self) -> u32 {
        self.start_page
    }

    /// Path for one page, e.g. `exercises?name=squat&page=2`
    pub fn page_path(&self, page: u32) -> String {
        let mut query = String::new();
        for (name, value) in &self.params {
            query.push_str(&format!("{}={}&", name, value));
        }
        format!("{}?{}page={}", self.path, query, page)
    }
}

/// True when a page of `count` records may be followed by another
pub fn is_full_page(count: usize) -> bool {
    count == api::PAGE_SIZE
}
