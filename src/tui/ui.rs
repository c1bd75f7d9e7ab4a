use crate::core::ports::Overlay;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BookList, DetailOverlay, SearchOverlay, SettingsOverlay, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

const HELP_TEXT: &str = " ↑↓ Move  Enter Open  m Show more  / Search  s Settings  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let palette = tui.palette;

    // Paint the theme background everywhere first
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.theme, palette).render(frame, title_area);
    BookList::new(&mut tui.book_list, palette).render(frame, main_area);
    frame.render_widget(
        Paragraph::new(Line::from(HELP_TEXT).centered()).style(palette.muted()),
        help_area,
    );

    match tui.overlay {
        Some(Overlay::Search) => {
            SearchOverlay::new(&mut tui.search, palette).render(frame, frame.area());
        }
        Some(Overlay::Settings) => {
            SettingsOverlay::new(&mut tui.settings, palette).render(frame, frame.area());
        }
        Some(Overlay::Detail) => {
            if let Some(detail) = &tui.detail {
                DetailOverlay::new(detail, palette).render(frame, frame.area());
            }
        }
        None => {}
    }
}
