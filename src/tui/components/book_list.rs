//! # Book List Component
//!
//! The list container: rendered previews in order, followed by a
//! "Show more (N)" row while the controller reports more matches.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookListState` lives in `TuiState` and is written through the
//!   `Presenter` ports (`clear_list`, `append_list`, `set_more_enabled`)
//! - `BookList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::render::{Preview, PreviewBatch};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: usize = 10;

/// Events emitted when a row is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookListEvent {
    /// A preview was activated; carries its book id.
    Select(String),
    LoadMore,
}

#[derive(Debug, Default)]
pub struct BookListState {
    pub previews: Vec<Preview>,
    /// `Some(remaining)` while the "show more" action is enabled.
    pub more: Option<usize>,
    pub selected: usize,
    pub list_state: ListState,
}

impl BookListState {
    pub fn clear(&mut self) {
        self.previews.clear();
        self.selected = 0;
        self.list_state = ListState::default();
    }

    pub fn append(&mut self, batch: PreviewBatch) {
        self.previews.extend(batch.previews);
    }

    pub fn set_more(&mut self, enabled: bool, remaining: usize) {
        self.more = enabled.then_some(remaining);
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }

    /// Previews plus the "show more" row when enabled.
    pub fn row_count(&self) -> usize {
        self.previews.len() + usize::from(self.more.is_some())
    }

    fn move_to(&mut self, row: usize) {
        self.selected = row.min(self.row_count().saturating_sub(1));
    }

    fn activate(&self) -> Option<BookListEvent> {
        match self.previews.get(self.selected) {
            Some(preview) => Some(BookListEvent::Select(preview.id.clone())),
            None if self.more.is_some() && self.selected == self.previews.len() => {
                Some(BookListEvent::LoadMore)
            }
            None => None,
        }
    }
}

impl EventHandler for BookListState {
    type Event = BookListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BookListEvent> {
        match event {
            TuiEvent::CursorUp => self.move_to(self.selected.saturating_sub(1)),
            TuiEvent::CursorDown => self.move_to(self.selected + 1),
            TuiEvent::PageUp => self.move_to(self.selected.saturating_sub(PAGE_STEP)),
            TuiEvent::PageDown => self.move_to(self.selected + PAGE_STEP),
            TuiEvent::Home => self.move_to(0),
            TuiEvent::End => self.move_to(usize::MAX),
            TuiEvent::Submit => return self.activate(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the book list.
pub struct BookList<'a> {
    state: &'a mut BookListState,
    palette: Palette,
}

impl<'a> BookList<'a> {
    pub fn new(state: &'a mut BookListState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Component for BookList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().style(self.palette.base());

        if self.state.row_count() == 0 {
            let empty = Paragraph::new(vec![
                Line::default(),
                Line::from("No results found. Your filters might be too narrow.").centered(),
            ])
            .style(self.palette.muted())
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let mut items: Vec<ListItem> = self
            .state
            .previews
            .iter()
            .map(|preview| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        preview.title.clone(),
                        self.palette.base().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", preview.author),
                        self.palette.muted(),
                    )),
                ])
            })
            .collect();

        if let Some(remaining) = self.state.more {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("Show more ({remaining})"),
                self.palette.accent().add_modifier(Modifier::BOLD),
            ))));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(self.palette.highlight())
            .highlight_symbol("▌ ");

        self.state.list_state.select(Some(self.state.selected));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
