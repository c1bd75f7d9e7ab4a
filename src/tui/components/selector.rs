//! # Selector Component
//!
//! A one-line `‹ label ›` picker over an `OptionList`. `←`/`→` cycle
//! through the options, wrapping at both ends.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::render::OptionList;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Changed,
}

#[derive(Debug, Default)]
pub struct Selector {
    options: OptionList,
    index: usize,
    pub focused: bool,
    pub palette: Palette,
}

impl Selector {
    pub fn new(options: OptionList) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Replaces the options, keeping the current value when it survives.
    pub fn set_options(&mut self, options: OptionList) {
        let current = self.value().map(str::to_string);
        self.options = options;
        self.index = 0;
        if let Some(value) = current {
            self.select(&value);
        }
    }

    /// Selects the option with `value`. Returns false if there is none.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.options.iter().position(|o| o.value == value) {
            Some(i) => {
                self.index = i;
                true
            }
            None => false,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.options.options.get(self.index).map(|o| o.value.as_str())
    }

    pub fn label(&self) -> &str {
        self.options
            .options
            .get(self.index)
            .map_or("", |o| o.label.as_str())
    }

    fn step(&mut self, forward: bool) -> Option<SelectorEvent> {
        let len = self.options.options.len();
        if len < 2 {
            return None;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
        Some(SelectorEvent::Changed)
    }
}

impl EventHandler for Selector {
    type Event = SelectorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft => self.step(false),
            TuiEvent::CursorRight | TuiEvent::InputChar(' ') => self.step(true),
            _ => None,
        }
    }
}

impl Component for Selector {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (arrow_style, label_style) = if self.focused {
            (self.palette.accent(), self.palette.base())
        } else {
            (self.palette.muted(), self.palette.muted())
        };
        let line = Line::from(vec![
            Span::styled("‹ ", arrow_style),
            Span::styled(self.label().to_string(), label_style),
            Span::styled(" ›", arrow_style),
        ]);
        frame.render_widget(Paragraph::new(line).style(self.palette.base()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::NameMap;
    use crate::core::render::render_option_list;

    fn genres() -> OptionList {
        let map: NameMap = [("g1", "Gothic"), ("g2", "Mystery")].into_iter().collect();
        render_option_list(&map, "All Genres")
    }

    #[test]
    fn test_starts_on_sentinel() {
        let selector = Selector::new(genres());
        assert_eq!(selector.value(), Some("any"));
        assert_eq!(selector.label(), "All Genres");
    }

    #[test]
    fn test_cycles_and_wraps() {
        let mut selector = Selector::new(genres());
        selector.handle_event(&TuiEvent::CursorRight);
        assert_eq!(selector.value(), Some("g1"));
        selector.handle_event(&TuiEvent::CursorLeft);
        selector.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(selector.value(), Some("g2"));
        selector.handle_event(&TuiEvent::CursorRight);
        assert_eq!(selector.value(), Some("any"));
    }

    #[test]
    fn test_set_options_keeps_surviving_value() {
        let mut selector = Selector::new(genres());
        assert!(selector.select("g2"));
        selector.set_options(genres());
        assert_eq!(selector.value(), Some("g2"));

        let map: NameMap = [("g9", "Other")].into_iter().collect();
        selector.set_options(render_option_list(&map, "All Genres"));
        assert_eq!(selector.value(), Some("any"));
    }

    #[test]
    fn test_empty_selector() {
        let mut selector = Selector::default();
        assert_eq!(selector.value(), None);
        assert_eq!(selector.label(), "");
        assert_eq!(selector.handle_event(&TuiEvent::CursorRight), None);
    }
}
