//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::core::catalog::{Book, Catalog, NameMap};
use crate::core::ports::{Overlay, Presenter};
use crate::core::render::{DetailView, OptionList, Preview, PreviewBatch};
use crate::core::state::App;
use crate::core::theme::{ColorTokens, Theme};

/// Builds a book published on 1 January 1900.
pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: format!("covers/{id}.jpg"),
        description: format!("About {title}."),
        published: Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// `total` books with ids `book-0..` and titles `Book-0..`, all by `a1`.
pub fn numbered_catalog(total: usize, page_size: usize) -> Catalog {
    let books = (0..total)
        .map(|i| book(&format!("book-{i}"), &format!("Book-{i}"), "a1", &["g1"]))
        .collect();
    let authors: NameMap = [("a1", "Author One"), ("a2", "Author Two")]
        .into_iter()
        .collect();
    let genres: NameMap = [("g1", "Genre One")].into_iter().collect();
    Catalog::new(books, authors, genres, page_size).unwrap()
}

pub fn test_app(total: usize, page_size: usize) -> App {
    App::new(Arc::new(numbered_catalog(total, page_size)))
}

/// Presenter that keeps the last value written to every port.
#[derive(Default)]
pub struct RecordingPresenter {
    pub list: Vec<Preview>,
    pub append_count: usize,
    pub genre_options: OptionList,
    pub author_options: OptionList,
    pub more: Option<(bool, usize)>,
    pub detail: Option<DetailView>,
    pub tokens: Option<ColorTokens>,
    pub theme_selection: Option<Theme>,
    pub open: HashSet<Overlay>,
}

impl RecordingPresenter {
    pub fn list_ids(&self) -> Vec<String> {
        self.list.iter().map(|p| p.id.clone()).collect()
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open.contains(&overlay)
    }
}

impl Presenter for RecordingPresenter {
    fn clear_list(&mut self) {
        self.list.clear();
    }

    fn append_list(&mut self, batch: PreviewBatch) {
        self.append_count += 1;
        self.list.extend(batch.previews);
    }

    fn set_genre_options(&mut self, options: OptionList) {
        self.genre_options = options;
    }

    fn set_author_options(&mut self, options: OptionList) {
        self.author_options = options;
    }

    fn set_more_enabled(&mut self, enabled: bool, remaining: usize) {
        self.more = Some((enabled, remaining));
    }

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn set_color_tokens(&mut self, tokens: ColorTokens) {
        self.tokens = Some(tokens);
    }

    fn set_theme_selection(&mut self, theme: Theme) {
        self.theme_selection = Some(theme);
    }

    fn set_overlay(&mut self, overlay: Overlay, open: bool) {
        if open {
            self.open.insert(overlay);
        } else {
            self.open.remove(&overlay);
        }
    }
}
