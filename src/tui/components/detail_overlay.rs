//! # Detail Overlay Component
//!
//! Expanded view of the selected book: cover source, title,
//! `"Author (Year)"` subtitle and the wrapped description.
//! Stateless; dismissed with Esc or Enter.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::render::DetailView;
use crate::tui::component::Component;
use crate::tui::components::centered_rect;
use crate::tui::palette::Palette;

pub struct DetailOverlay<'a> {
    pub detail: &'a DetailView,
    pub palette: Palette,
}

impl<'a> DetailOverlay<'a> {
    pub fn new(detail: &'a DetailView, palette: Palette) -> Self {
        Self { detail, palette }
    }
}

/// Wraps `text` to `width` columns. Zero width yields no lines.
fn wrap_description(text: &str, width: u16) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, usize::from(width))
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

impl Component for DetailOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.muted())
            .style(self.palette.base())
            .title(Line::from(format!(" {} ", self.detail.backdrop)).style(self.palette.muted()))
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [cover_area, title_area, subtitle_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("[cover] {}", self.detail.image),
                self.palette.muted(),
            )),
            cover_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.detail.title.as_str(),
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.detail.subtitle.as_str(),
                self.palette.accent(),
            )),
            subtitle_area,
        );

        let lines = wrap_description(&self.detail.description, body_area.width);
        frame.render_widget(
            Paragraph::new(lines).style(self.palette.base()),
            body_area,
        );
    }
}
