//! # Presentation Ports
//!
//! The named sinks the controller writes to. Any presentation layer
//! (the ratatui adapter, a test recorder) implements `Presenter`; core
//! code never reaches into a widget tree directly.

use crate::core::render::{DetailView, OptionList, PreviewBatch};
use crate::core::theme::{ColorTokens, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}

pub trait Presenter {
    /// Empties the list container.
    fn clear_list(&mut self);

    /// Appends a batch of previews to the end of the list container.
    fn append_list(&mut self, batch: PreviewBatch);

    fn set_genre_options(&mut self, options: OptionList);

    fn set_author_options(&mut self, options: OptionList);

    /// Enables or disables the "show more" action. `remaining` is the
    /// number of matches not yet shown.
    fn set_more_enabled(&mut self, enabled: bool, remaining: usize);

    /// Fills the detail overlay fields.
    fn show_detail(&mut self, detail: DetailView);

    fn set_color_tokens(&mut self, tokens: ColorTokens);

    /// Value shown by the settings form's theme selector.
    fn set_theme_selection(&mut self, theme: Theme);

    fn set_overlay(&mut self, overlay: Overlay, open: bool);
}
