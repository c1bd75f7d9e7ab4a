//! # Search Overlay Component
//!
//! The filter form: a title text field and genre/author selectors.
//! Opened with `/`, submitted with Enter, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchFormState` lives in `TuiState` and keeps its values between
//!   openings, like a browser form
//! - `SearchOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::form::FilterForm;
use crate::core::render::OptionList;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::components::selector::Selector;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const SEARCH_HELP: &str = " Tab Next  ←→ Change  Enter Search  Esc Cancel ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Title,
    Genre,
    Author,
}

impl SearchField {
    fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Genre => SearchField::Author,
            SearchField::Author => SearchField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Genre => SearchField::Title,
            SearchField::Author => SearchField::Genre,
        }
    }
}

/// Events emitted by the search overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Submit(FilterForm),
    Dismiss,
}

#[derive(Debug, Default)]
pub struct SearchFormState {
    pub title: TextField,
    pub genre: Selector,
    pub author: Selector,
    pub focus: SearchField,
}

impl SearchFormState {
    pub fn set_genre_options(&mut self, options: OptionList) {
        self.genre.set_options(options);
    }

    pub fn set_author_options(&mut self, options: OptionList) {
        self.author.set_options(options);
    }

    /// Current form values. A selector without options submits an empty
    /// value, which the form parse rejects.
    pub fn form(&self) -> FilterForm {
        FilterForm {
            title: self.title.value().to_string(),
            genre: self.genre.value().unwrap_or_default().to_string(),
            author: self.author.value().unwrap_or_default().to_string(),
        }
    }
}

impl EventHandler for SearchFormState {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => Some(SearchEvent::Dismiss),
            TuiEvent::Submit => Some(SearchEvent::Submit(self.form())),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            _ => {
                match self.focus {
                    SearchField::Title => {
                        self.title.handle_event(event);
                    }
                    SearchField::Genre => {
                        self.genre.handle_event(event);
                    }
                    SearchField::Author => {
                        self.author.handle_event(event);
                    }
                }
                None
            }
        }
    }
}

/// Transient render wrapper for the search overlay.
pub struct SearchOverlay<'a> {
    state: &'a mut SearchFormState,
    palette: Palette,
}

impl<'a> SearchOverlay<'a> {
    pub fn new(state: &'a mut SearchFormState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Component for SearchOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.muted())
            .style(self.palette.base())
            .title(" Search ")
            .title_bottom(Line::from(SEARCH_HELP).centered())
            .padding(Padding::uniform(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let focus = self.state.focus;
        let palette = self.palette;
        let label = |text: &'static str, field: SearchField| {
            let style = if focus == field {
                palette.accent()
            } else {
                palette.muted()
            };
            Paragraph::new(Span::styled(format!("{text:<8}"), style))
        };

        let split = |row: Rect| {
            let [label_area, value_area] =
                Layout::horizontal([Constraint::Length(8), Constraint::Min(0)]).areas(row);
            (label_area, value_area)
        };

        let (title_label, title_value) = split(rows[0]);
        frame.render_widget(label("Title", SearchField::Title), title_label);
        self.state.title.focused = focus == SearchField::Title;
        self.state.title.palette = palette;
        self.state.title.render(frame, title_value);

        let (genre_label, genre_value) = split(rows[2]);
        frame.render_widget(label("Genre", SearchField::Genre), genre_label);
        self.state.genre.focused = focus == SearchField::Genre;
        self.state.genre.palette = palette;
        self.state.genre.render(frame, genre_value);

        let (author_label, author_value) = split(rows[4]);
        frame.render_widget(label("Author", SearchField::Author), author_label);
        self.state.author.focused = focus == SearchField::Author;
        self.state.author.palette = palette;
        self.state.author.render(frame, author_value);
    }
}
