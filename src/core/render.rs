//! # Entity Renderer
//!
//! Pure projections from catalog records into display elements. Nothing
//! here touches the screen; the controller hands the results to a
//! `Presenter`.
//!
//! Author lookups that miss fall back to [`UNKNOWN_AUTHOR`] so one bad
//! record never aborts a batch.

use crate::core::catalog::{Book, NameMap};
use crate::core::filter::ANY;

pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const ALL_GENRES_LABEL: &str = "All Genres";
pub const ALL_AUTHORS_LABEL: &str = "All Authors";

/// Compact list representation of one book. `id` is the attachment the
/// presentation layer hands back when the preview is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: String,
    pub image: String,
    pub title: String,
    pub author: String,
}

/// Previews grouped as one appendable unit, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewBatch {
    pub previews: Vec<Preview>,
}

impl PreviewBatch {
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    pub options: Vec<OptionItem>,
}

impl OptionList {
    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// Fields of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    /// Blurred backdrop source.
    pub backdrop: String,
    pub image: String,
    pub title: String,
    /// `"Author (Year)"`.
    pub subtitle: String,
    pub description: String,
}

fn author_name<'a>(authors: &'a NameMap, id: &str) -> &'a str {
    authors.get(id).unwrap_or(UNKNOWN_AUTHOR)
}

pub fn render_preview(book: &Book, authors: &NameMap) -> Preview {
    Preview {
        id: book.id.clone(),
        image: book.image.clone(),
        title: book.title.clone(),
        author: author_name(authors, &book.author).to_string(),
    }
}

pub fn render_batch<'a, I>(books: I, authors: &NameMap) -> PreviewBatch
where
    I: IntoIterator<Item = &'a Book>,
{
    PreviewBatch {
        previews: books
            .into_iter()
            .map(|book| render_preview(book, authors))
            .collect(),
    }
}

/// The `"any"` sentinel labelled `all_label`, then one option per entry.
pub fn render_option_list(mapping: &NameMap, all_label: &str) -> OptionList {
    let sentinel = OptionItem {
        value: ANY.to_string(),
        label: all_label.to_string(),
    };
    let entries = mapping.iter().map(|(id, name)| OptionItem {
        value: id.to_string(),
        label: name.to_string(),
    });
    OptionList {
        options: std::iter::once(sentinel).chain(entries).collect(),
    }
}

pub fn render_detail(book: &Book, authors: &NameMap) -> DetailView {
    DetailView {
        id: book.id.clone(),
        backdrop: book.image.clone(),
        image: book.image.clone(),
        title: book.title.clone(),
        subtitle: format!(
            "{} ({})",
            author_name(authors, &book.author),
            book.published_year()
        ),
        description: book.description.clone(),
    }
}
