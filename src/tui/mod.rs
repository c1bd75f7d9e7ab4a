//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! `TuiState` is the presentation layer: it implements the core
//! `Presenter` ports, so `update()` writes straight into it.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event or a terminal resize. All pending events
//! are drained before the next draw.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::info;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::{self, ResolvedConfig};
use crate::core::ports::{Overlay, Presenter};
use crate::core::render::{DetailView, OptionList, PreviewBatch};
use crate::core::state::App;
use crate::core::theme::{ColorTokens, Theme};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookListEvent, BookListState, SearchEvent, SearchFormState, SettingsEvent, SettingsFormState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::palette::Palette;

/// TUI-specific presentation state (not part of core browse logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub book_list: BookListState,
    pub search: SearchFormState,
    pub settings: SettingsFormState,
    pub detail: Option<DetailView>,
    /// At most one overlay is open at a time.
    pub overlay: Option<Overlay>,
    pub palette: Palette,
}

impl Presenter for TuiState {
    fn clear_list(&mut self) {
        self.book_list.clear();
    }

    fn append_list(&mut self, batch: PreviewBatch) {
        self.book_list.append(batch);
    }

    fn set_genre_options(&mut self, options: OptionList) {
        self.search.set_genre_options(options);
    }

    fn set_author_options(&mut self, options: OptionList) {
        self.search.set_author_options(options);
    }

    fn set_more_enabled(&mut self, enabled: bool, remaining: usize) {
        self.book_list.set_more(enabled, remaining);
    }

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn set_color_tokens(&mut self, tokens: ColorTokens) {
        self.palette = Palette::from_tokens(tokens);
    }

    fn set_theme_selection(&mut self, theme: Theme) {
        self.settings.select_theme(theme);
    }

    fn set_overlay(&mut self, overlay: Overlay, open: bool) {
        if open {
            self.overlay = Some(overlay);
        } else if self.overlay == Some(overlay) {
            self.overlay = None;
            if overlay == Overlay::Detail {
                self.detail = None;
            }
        }
    }
}

/// Translates a terminal event into a core action, updating local
/// component state on the way. Overlays capture all input while open.
fn route_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match tui.overlay {
        Some(Overlay::Search) => tui.search.handle_event(event).map(|e| match e {
            SearchEvent::Submit(form) => Action::SubmitFilter(form),
            SearchEvent::Dismiss => Action::CloseOverlay(Overlay::Search),
        }),
        Some(Overlay::Settings) => tui.settings.handle_event(event).map(|e| match e {
            SettingsEvent::Submit(form) => Action::SubmitSettings(form),
            SettingsEvent::Dismiss => Action::CloseOverlay(Overlay::Settings),
        }),
        Some(Overlay::Detail) => match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('q') => {
                Some(Action::CloseOverlay(Overlay::Detail))
            }
            _ => None,
        },
        None => match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('/') => Some(Action::OpenOverlay(Overlay::Search)),
            TuiEvent::InputChar('s') => Some(Action::OpenOverlay(Overlay::Settings)),
            TuiEvent::InputChar('m') => Some(Action::LoadMore),
            _ => tui.book_list.handle_event(event).map(|e| match e {
                BookListEvent::Select(id) => Action::SelectPreview(id),
                BookListEvent::LoadMore => Action::LoadMore,
            }),
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Bracketed paste keeps pasted titles as one event
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig, catalog: Catalog) -> std::io::Result<()> {
    let prefers_dark = config::prefers_dark(config.theme);
    info!(
        "Theme setting {:?}, dark preference: {}",
        config.theme, prefers_dark
    );

    let mut app = App::new(Arc::new(catalog));
    let mut tui = TuiState::default();
    update(&mut app, Action::Startup { prefers_dark }, &mut tui);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(tui, &event)
                && update(app, action, tui) == Effect::Quit
            {
                info!("Quitting");
                return Ok(());
            }
        }
    }
}
