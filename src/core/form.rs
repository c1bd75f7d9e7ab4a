//! # Forms
//!
//! Raw values submitted by the search and settings forms, and the parse
//! step that turns them into typed values. Parsing fails closed: anything
//! unrecognised, including genre/author ids the catalog doesn't know, is a
//! `FormError` and the controller leaves state untouched.

use std::fmt;

use crate::core::catalog::{Catalog, NameMap};
use crate::core::filter::{Choice, FilterCriteria};
use crate::core::theme::{Theme, UnknownTheme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A selector was submitted without a value.
    MissingChoice(&'static str),
    /// A selector value naming an id the catalog doesn't have.
    UnknownChoice(&'static str, String),
    UnknownTheme(UnknownTheme),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingChoice(field) => write!(f, "no value selected for `{field}`"),
            FormError::UnknownChoice(field, value) => {
                write!(f, "unknown {field} `{value}`")
            }
            FormError::UnknownTheme(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FormError {}

/// Search form as submitted: `{title, genre, author}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub title: String,
    pub genre: String,
    pub author: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: crate::core::filter::ANY.to_string(),
            author: crate::core::filter::ANY.to_string(),
        }
    }
}

impl FilterForm {
    /// Genre and author must be `"any"` or an id present in `catalog`.
    pub fn parse(&self, catalog: &Catalog) -> Result<FilterCriteria, FormError> {
        let genre = parse_choice("genre", &self.genre, catalog.genres())?;
        let author = parse_choice("author", &self.author, catalog.authors())?;
        Ok(FilterCriteria::new(&self.title, genre, author))
    }
}

fn parse_choice(field: &'static str, value: &str, known: &NameMap) -> Result<Choice, FormError> {
    match Choice::from_form_value(value) {
        None => Err(FormError::MissingChoice(field)),
        Some(Choice::Id(id)) if !known.contains(&id) => Err(FormError::UnknownChoice(field, id)),
        Some(choice) => Ok(choice),
    }
}

/// Settings form as submitted: `{theme}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub theme: String,
}

impl SettingsForm {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    pub fn parse(&self) -> Result<Theme, FormError> {
        self.theme.parse().map_err(FormError::UnknownTheme)
    }
}
