//! # TitleBar Component
//!
//! Top status bar: application name, the status message from core state
//! and the active theme.
//!
//! Stateless and props-based: the parent builds a `TitleBar` each frame
//! from `App` and hands it a `Rect`.
//!
//! ```text
//! Folio | Showing 36 of 40                                  Theme: Day
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct TitleBar {
    pub status_message: String,
    pub theme: Theme,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(status_message: String, theme: Theme, palette: Palette) -> Self {
        Self {
            status_message,
            theme,
            palette,
        }
    }

    fn left_text(&self) -> String {
        if self.status_message.is_empty() {
            "Folio".to_string()
        } else {
            format!("Folio | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme_text = format!("Theme: {}", self.theme.label());
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(theme_text.len() as u16),
        ])
        .areas(area);

        let style = self.palette.base().add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Span::styled(self.left_text(), style)).style(self.palette.base()),
            left,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(theme_text, self.palette.muted()))),
            right,
        );
    }
}
