//! # Settings Overlay Component
//!
//! Theme selector. Opened with `s`, submitted with Enter, dismissed with
//! Esc. The selector is pre-set by the controller at startup from the
//! ambient color-scheme preference.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::form::SettingsForm;
use crate::core::render::{OptionItem, OptionList};
use crate::core::theme::Theme;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::components::selector::Selector;
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Submit(SettingsForm),
    Dismiss,
}

#[derive(Debug)]
pub struct SettingsFormState {
    pub theme: Selector,
}

impl Default for SettingsFormState {
    fn default() -> Self {
        let options = Theme::ALL
            .iter()
            .map(|t| OptionItem {
                value: t.as_str().to_string(),
                label: t.label().to_string(),
            })
            .collect();
        Self {
            theme: Selector::new(OptionList { options }),
        }
    }
}

impl SettingsFormState {
    pub fn select_theme(&mut self, theme: Theme) {
        self.theme.select(theme.as_str());
    }
}

impl EventHandler for SettingsFormState {
    type Event = SettingsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SettingsEvent> {
        match event {
            TuiEvent::Escape => Some(SettingsEvent::Dismiss),
            TuiEvent::Submit => Some(SettingsEvent::Submit(SettingsForm::new(
                self.theme.value().unwrap_or_default(),
            ))),
            _ => {
                self.theme.handle_event(event);
                None
            }
        }
    }
}

/// Transient render wrapper for the settings overlay.
pub struct SettingsOverlay<'a> {
    state: &'a mut SettingsFormState,
    palette: Palette,
}

impl<'a> SettingsOverlay<'a> {
    pub fn new(state: &'a mut SettingsFormState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Component for SettingsOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.muted())
            .style(self.palette.base())
            .title(" Settings ")
            .title_bottom(Line::from(" ←→ Change  Enter Save  Esc Cancel ").centered())
            .padding(Padding::uniform(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [row] = Layout::vertical([Constraint::Length(1)]).areas(inner);
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(8), Constraint::Min(0)]).areas(row);

        frame.render_widget(
            Paragraph::new(Span::styled("Theme", self.palette.accent())),
            label_area,
        );
        self.state.theme.focused = true;
        self.state.theme.palette = self.palette;
        self.state.theme.render(frame, value_area);
    }
}
