//! # Application State
//!
//! Core browse state for Folio. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── session: BrowseSession     // matches + page cursor
//! ├── theme: Theme               // applied day/night theme
//! ├── active: Option<String>     // book shown in the detail overlay
//! └── status_message: String     // status bar text
//! ```
//!
//! State changes only happen through `update(app, action, ports)` in
//! action.rs.

use std::sync::Arc;

use crate::core::browse::BrowseSession;
use crate::core::catalog::Catalog;
use crate::core::theme::Theme;

pub struct App {
    pub session: BrowseSession,
    pub theme: Theme,
    /// Id of the book whose detail overlay is open.
    pub active: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            session: BrowseSession::new(catalog),
            theme: Theme::default(),
            active: None,
            status_message: String::from("Welcome to Folio!"),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.session.catalog()
    }

    /// `"Showing 36 of 40"`-style summary of the current matches.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {}",
            self.session.revealed(),
            self.session.match_count()
        )
    }
}
