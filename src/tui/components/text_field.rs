//! # TextField Component
//!
//! Single-line text input used by the search form's title field.
//!
//! The buffer and cursor are internal state; `focused` and the palette are
//! props set by the owning form each frame. Newlines in pasted text are
//! flattened to spaces.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFieldEvent {
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct TextField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    pub focused: bool,
    pub palette: Palette,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Display column of the cursor, saturating at `u16::MAX`.
    fn cursor_column(&self) -> u16 {
        u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX)
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl EventHandler for TextField {
    type Event = TextFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(TextFieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flat = text.replace(['\n', '\r'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(TextFieldEvent::ContentChanged)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(TextFieldEvent::ContentChanged)
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(TextFieldEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.focused {
            self.palette.base()
        } else {
            self.palette.muted()
        };

        // Scroll horizontally so the cursor stays visible
        let column = self.cursor_column();
        let skip = column.saturating_sub(area.width.saturating_sub(1));
        let paragraph = Paragraph::new(Line::from(Span::styled(self.buffer.as_str(), style)))
            .style(style)
            .scroll((0, skip));
        frame.render_widget(paragraph, area);

        if self.focused {
            frame.set_cursor_position((area.x + column - skip, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextField {
        let mut field = TextField::default();
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        field
    }

    #[test]
    fn test_typing_appends() {
        let field = typed("moby");
        assert_eq!(field.value(), "moby");
        assert_eq!(field.cursor, 4);
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut field = typed("Brontë");
        assert_eq!(
            field.handle_event(&TuiEvent::Backspace),
            Some(TextFieldEvent::ContentChanged)
        );
        assert_eq!(field.value(), "Bront");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::default();
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut field = typed("ac");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(field.value(), "abc");
        field.handle_event(&TuiEvent::Home);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = TextField::default();
        field.handle_event(&TuiEvent::Paste("two\nlines".to_string()));
        assert_eq!(field.value(), "two lines");
        assert_eq!(field.cursor, field.value().len());
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let field = typed("ëa");
        assert_eq!(field.cursor_column(), 2);
    }

    #[test]
    fn test_cursor_column_saturates_on_huge_paste() {
        let mut field = TextField::default();
        field.handle_event(&TuiEvent::Paste("x".repeat(70_000)));
        assert_eq!(field.cursor_column(), u16::MAX);
    }
}
