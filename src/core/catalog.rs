//! # Catalog Store
//!
//! The immutable dataset Folio browses: books, author and genre name
//! lookups, and the page size.
//!
//! ```text
//! Catalog
//! ├── books: Vec<Book>     // catalog order, ids unique
//! ├── authors: NameMap     // author id → display name
//! ├── genres: NameMap      // genre id → display name
//! └── page_size: usize     // > 0
//! ```
//!
//! Loaded once at startup (bundled sample or a JSON file) and shared
//! behind an `Arc`. Nothing mutates it afterwards.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Datelike, Utc};
use log::{info, warn};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Page size used when the catalog document doesn't specify one.
pub const DEFAULT_PAGE_SIZE: usize = 36;

const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Author id, resolved through `Catalog::authors`.
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// Ordered `id → name` lookup. Iterates in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    entries: Vec<(String, String)>,
}

impl NameMap {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, name)| name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameMap {
    /// Later duplicates of a key are dropped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = NameMap::default();
        for (key, value) in iter {
            let key = key.into();
            if !map.contains(&key) {
                map.entries.push((key, value.into()));
            }
        }
        map
    }
}

impl<'de> Deserialize<'de> for NameMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameMapVisitor;

        impl<'de> Visitor<'de> for NameMapVisitor {
            type Value = NameMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping ids to display names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<NameMap, A::Error> {
                let mut map = NameMap::default();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    if map.contains(&key) {
                        return Err(serde::de::Error::custom(format!("duplicate id `{key}`")));
                    }
                    map.entries.push((key, value));
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(NameMapVisitor)
    }
}

/// On-disk shape of a catalog document.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    page_size: Option<usize>,
    #[serde(default)]
    authors: NameMap,
    #[serde(default)]
    genres: NameMap,
    #[serde(default)]
    books: Vec<Book>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(String),
    InvalidPageSize,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate book id `{id}`"),
            CatalogError::InvalidPageSize => write!(f, "page size must be greater than zero"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: NameMap,
    genres: NameMap,
    page_size: usize,
}

impl Catalog {
    /// Builds a validated catalog. Book ids must be unique and the page
    /// size positive. Dangling author/genre references are only logged.
    pub fn new(
        books: Vec<Book>,
        authors: NameMap,
        genres: NameMap,
        page_size: usize,
    ) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }

        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
            if !authors.contains(&book.author) {
                warn!("Book {} references unknown author {}", book.id, book.author);
            }
            for genre in book.genres.iter().filter(|g| !genres.contains(g)) {
                warn!("Book {} references unknown genre {}", book.id, genre);
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(
            file.books,
            file.authors,
            file.genres,
            file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded catalog from {} ({} books)",
            path.display(),
            catalog.books.len()
        );
        Ok(catalog)
    }

    /// The sample catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Loads `path`, or the bundled sample when `None`, then applies a
    /// page size override if one is given.
    pub fn open(path: Option<&Path>, page_size: Option<usize>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::load(path)?,
            None => {
                info!("Using bundled sample catalog");
                Self::bundled()?
            }
        };
        match page_size {
            Some(size) => catalog.with_page_size(size),
            None => Ok(catalog),
        }
    }

    /// Replaces the page size, keeping the positivity invariant.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &NameMap {
        &self.authors
    }

    pub fn genres(&self) -> &NameMap {
        &self.genres
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Linear lookup by id over the full catalog.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }
}
