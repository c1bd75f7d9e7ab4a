//! # Browse Session
//!
//! Current matches plus the page cursor. The only mutation paths are
//! `apply_filter` and `advance_page`.
//!
//! ```text
//! BrowseSession
//! ├── catalog: Arc<Catalog>   // shared, read-only
//! ├── matches: Vec<usize>     // indices into catalog.books(), catalog order
//! └── page: usize             // 1-based, reset on every apply_filter
//! ```
//!
//! Revealed so far: `min(page * page_size, matches.len())`.

use std::sync::Arc;

use crate::core::catalog::{Book, Catalog};
use crate::core::filter::FilterCriteria;

#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Arc<Catalog>,
    matches: Vec<usize>,
    page: usize,
}

impl BrowseSession {
    /// Starts with every catalog record matched and the cursor on page 1.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let matches = (0..catalog.len()).collect();
        Self {
            catalog,
            matches,
            page: 1,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.catalog.page_size()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn matches(&self) -> impl Iterator<Item = &Book> {
        self.matches.iter().map(|&i| &self.catalog.books()[i])
    }

    /// Number of matches currently revealed.
    pub fn revealed(&self) -> usize {
        (self.page * self.page_size()).min(self.matches.len())
    }

    /// Replaces the matches with the books satisfying `criteria` and
    /// rewinds to page 1.
    pub fn apply_filter(&mut self, criteria: &FilterCriteria) {
        self.matches = self
            .catalog
            .books()
            .iter()
            .enumerate()
            .filter(|(_, book)| criteria.matches(book))
            .map(|(i, _)| i)
            .collect();
        self.page = 1;
    }

    /// The records shown for page 1.
    pub fn first_page(&self) -> Vec<&Book> {
        self.slice(0, self.page_size())
    }

    /// Returns the next page of matches and moves the cursor past it.
    /// Past the end this yields nothing and leaves the cursor alone.
    pub fn advance_page(&mut self) -> Vec<&Book> {
        if !self.has_more() {
            return Vec::new();
        }
        let start = self.page * self.page_size();
        self.page += 1;
        self.slice(start, start + self.page_size())
    }

    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Matches not yet revealed.
    pub fn remaining(&self) -> usize {
        self.matches
            .len()
            .saturating_sub(self.page * self.page_size())
    }

    /// Looks a record up in the full catalog, not just the matches.
    pub fn select_by_id(&self, id: &str) -> Option<&Book> {
        self.catalog.find(id)
    }

    fn slice(&self, start: usize, end: usize) -> Vec<&Book> {
        let end = end.min(self.matches.len());
        let start = start.min(end);
        self.matches[start..end]
            .iter()
            .map(|&i| &self.catalog.books()[i])
            .collect()
    }
}
