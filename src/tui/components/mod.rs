//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: status line with the match summary and theme
//! - `DetailOverlay`: the selected book's detail view
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit high-level events:
//! - `BookListState`: previews, selection and the "show more" row
//! - `SearchFormState`: title field plus genre/author selectors
//! - `SettingsFormState`: theme selector
//! - `TextField`, `Selector`: the form controls they are built from
//!
//! Overlays use the persistent state + transient wrapper pattern: the
//! `*State` lives in `TuiState`, the wrapper is built each frame with
//! borrowed state and the current `Palette`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── title_bar.rs         (top status bar)
//! ├── book_list.rs         (preview list + show more)
//! ├── search_overlay.rs    (filter form)
//! ├── settings_overlay.rs  (theme form)
//! ├── detail_overlay.rs    (book detail)
//! ├── text_field.rs        (single-line input)
//! └── selector.rs          (option cycler)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod book_list;
pub mod detail_overlay;
pub mod search_overlay;
pub mod selector;
pub mod settings_overlay;
pub mod text_field;
mod title_bar;

pub use book_list::{BookList, BookListEvent, BookListState};
pub use detail_overlay::DetailOverlay;
pub use search_overlay::{SearchEvent, SearchFormState, SearchOverlay};
pub use settings_overlay::{SettingsEvent, SettingsFormState, SettingsOverlay};
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
