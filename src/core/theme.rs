//! # Theme
//!
//! Day/night themes and the two color tokens each one writes.
//!
//! | Theme | `dark`          | `light`         |
//! |-------|-----------------|-----------------|
//! | day   | `10, 10, 20`    | `255, 255, 255` |
//! | night | `255, 255, 255` | `10, 10, 20`    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

/// An `r, g, b` color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Day, Theme::Night];

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Night } else { Theme::Day }
    }

    pub fn tokens(self) -> ColorTokens {
        match self {
            Theme::Day => ColorTokens {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => ColorTokens {
                dark: PAPER,
                light: INK,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme `{}` (expected \"day\" or \"night\")", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Exact tokens only: `"day"` or `"night"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
