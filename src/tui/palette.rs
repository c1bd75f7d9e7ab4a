//! Terminal colors derived from the active theme's color tokens.
//!
//! `dark` is the ink color and `light` the paper color, so the day theme
//! is dark text on a light background and night is the reverse.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::{ColorTokens, Rgb, Theme};

const ACCENT: Color = Color::Rgb(0, 150, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
}

impl Palette {
    pub fn from_tokens(tokens: ColorTokens) -> Self {
        Self {
            fg: rgb(tokens.dark),
            bg: rgb(tokens.light),
            muted: rgb(blend(tokens.dark, tokens.light)),
            accent: ACCENT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_tokens(Theme::default().tokens())
    }
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

fn blend(a: Rgb, b: Rgb) -> Rgb {
    let mid = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    Rgb(mid(a.0, b.0), mid(a.1, b.1), mid(a.2, b.2))
}
