//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User submits the search form? That's `Action::SubmitFilter(form)`.
//! User hits "show more"? That's `Action::LoadMore`.
//!
//! `update()` takes the current state, an action and the presentation
//! ports, mutates the state and writes whatever changed to the ports.
//!
//! ```text
//! State + Action  →  update()  →  New State + port writes
//! ```
//!
//! Every action runs to completion before the next one is handled.
//! Rejected input (bad forms, unknown ids) leaves state and ports alone.

use log::{debug, info, warn};

use crate::core::browse::BrowseSession;
use crate::core::form::{FilterForm, SettingsForm};
use crate::core::ports::{Overlay, Presenter};
use crate::core::render::{
    ALL_AUTHORS_LABEL, ALL_GENRES_LABEL, render_batch, render_detail, render_option_list,
};
use crate::core::state::App;
use crate::core::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// One-time startup sequence. `prefers_dark` is the ambient
    /// color-scheme signal.
    Startup { prefers_dark: bool },
    SubmitFilter(FilterForm),
    LoadMore,
    /// A preview was activated; carries its book id.
    SelectPreview(String),
    SubmitSettings(SettingsForm),
    OpenOverlay(Overlay),
    CloseOverlay(Overlay),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action, ports: &mut impl Presenter) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Startup { prefers_dark } => {
            startup(app, prefers_dark, ports);
            Effect::None
        }
        Action::SubmitFilter(form) => {
            submit_filter(app, &form, ports);
            Effect::None
        }
        Action::LoadMore => {
            load_more(app, ports);
            Effect::None
        }
        Action::SelectPreview(id) => {
            select_preview(app, &id, ports);
            Effect::None
        }
        Action::SubmitSettings(form) => {
            submit_settings(app, &form, ports);
            Effect::None
        }
        Action::OpenOverlay(overlay) => {
            ports.set_overlay(overlay, true);
            Effect::None
        }
        Action::CloseOverlay(overlay) => {
            if overlay == Overlay::Detail {
                app.active = None;
            }
            ports.set_overlay(overlay, false);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn startup(app: &mut App, prefers_dark: bool, ports: &mut impl Presenter) {
    app.session = BrowseSession::new(app.session.catalog().clone());
    app.active = None;

    let catalog = app.catalog();
    info!(
        "Starting with {} books, {} per page",
        catalog.len(),
        catalog.page_size()
    );
    let genres = render_option_list(catalog.genres(), ALL_GENRES_LABEL);
    let authors = render_option_list(catalog.authors(), ALL_AUTHORS_LABEL);

    show_first_page(app, ports);
    ports.set_genre_options(genres);
    ports.set_author_options(authors);

    apply_theme(app, Theme::from_preference(prefers_dark), ports);
}

fn submit_filter(app: &mut App, form: &FilterForm, ports: &mut impl Presenter) {
    let criteria = match form.parse(app.catalog()) {
        Ok(criteria) => criteria,
        Err(e) => {
            warn!("Rejected search form: {}", e);
            return;
        }
    };

    app.session.apply_filter(&criteria);
    info!(
        "Filter {:?} matched {} books",
        criteria,
        app.session.match_count()
    );

    show_first_page(app, ports);
    ports.set_overlay(Overlay::Search, false);
}

fn load_more(app: &mut App, ports: &mut impl Presenter) {
    if !app.session.has_more() {
        debug!("Show more ignored: nothing left to reveal");
        return;
    }

    let catalog = app.session.catalog().clone();
    let batch = render_batch(app.session.advance_page(), catalog.authors());
    ports.append_list(batch);
    refresh_more(app, ports);
}

fn select_preview(app: &mut App, id: &str, ports: &mut impl Presenter) {
    let Some(book) = app.session.select_by_id(id) else {
        debug!("Selected id {} is not in the catalog", id);
        return;
    };

    let detail = render_detail(book, app.catalog().authors());
    app.active = Some(book.id.clone());
    ports.show_detail(detail);
    ports.set_overlay(Overlay::Detail, true);
}

fn submit_settings(app: &mut App, form: &SettingsForm, ports: &mut impl Presenter) {
    match form.parse() {
        Ok(theme) => {
            apply_theme(app, theme, ports);
            ports.set_overlay(Overlay::Settings, false);
        }
        Err(e) => warn!("Rejected settings form: {}", e),
    }
}

/// Clears the list and shows page 1 of the current matches.
fn show_first_page(app: &mut App, ports: &mut impl Presenter) {
    let batch = render_batch(
        app.session.first_page(),
        app.session.catalog().authors(),
    );
    ports.clear_list();
    ports.append_list(batch);
    refresh_more(app, ports);
}

fn refresh_more(app: &mut App, ports: &mut impl Presenter) {
    ports.set_more_enabled(app.session.has_more(), app.session.remaining());
    app.status_message = app.summary();
}

fn apply_theme(app: &mut App, theme: Theme, ports: &mut impl Presenter) {
    app.theme = theme;
    ports.set_theme_selection(theme);
    ports.set_color_tokens(theme.tokens());
    debug!("Applied {} theme", theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::Overlay;
    use crate::core::theme::Theme;
    use crate::test_support::{RecordingPresenter, test_app};

    fn started(total: usize, page_size: usize) -> (App, RecordingPresenter) {
        let mut app = test_app(total, page_size);
        let mut ports = RecordingPresenter::default();
        update(&mut app, Action::Startup { prefers_dark: false }, &mut ports);
        (app, ports)
    }

    fn filter(title: &str) -> Action {
        Action::SubmitFilter(FilterForm {
            title: title.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_startup_renders_first_page_and_options() {
        let (app, ports) = started(25, 10);
        assert_eq!(ports.list_ids(), (0..10).map(|i| format!("book-{i}")).collect::<Vec<_>>());
        assert_eq!(ports.more, Some((true, 15)));
        assert_eq!(ports.genre_options.options[0].label, "All Genres");
        assert_eq!(ports.author_options.options[0].label, "All Authors");
        assert_eq!(ports.theme_selection, Some(Theme::Day));
        assert_eq!(ports.tokens, Some(Theme::Day.tokens()));
        assert_eq!(app.status_message, "Showing 10 of 25");
    }

    #[test]
    fn test_startup_with_dark_preference_selects_night() {
        let mut app = test_app(3, 10);
        let mut ports = RecordingPresenter::default();
        update(&mut app, Action::Startup { prefers_dark: true }, &mut ports);
        assert_eq!(app.theme, Theme::Night);
        assert_eq!(ports.theme_selection, Some(Theme::Night));
        assert_eq!(ports.tokens, Some(Theme::Night.tokens()));
    }

    #[test]
    fn test_load_more_appends_until_exhausted() {
        let (mut app, mut ports) = started(25, 10);

        update(&mut app, Action::LoadMore, &mut ports);
        assert_eq!(ports.list.len(), 20);
        assert_eq!(ports.more, Some((true, 5)));

        update(&mut app, Action::LoadMore, &mut ports);
        assert_eq!(ports.list.len(), 25);
        assert_eq!(ports.list[24].id, "book-24");
        assert_eq!(ports.more, Some((false, 0)));

        let appends = ports.append_count;
        update(&mut app, Action::LoadMore, &mut ports);
        assert_eq!(ports.append_count, appends);
        assert_eq!(app.session.page(), 3);
    }

    #[test]
    fn test_filter_replaces_list_and_closes_search() {
        let (mut app, mut ports) = started(25, 10);
        update(&mut app, Action::LoadMore, &mut ports);
        update(&mut app, Action::OpenOverlay(Overlay::Search), &mut ports);
        assert!(ports.is_open(Overlay::Search));

        update(&mut app, filter("BOOK-2"), &mut ports);
        assert_eq!(app.session.page(), 1);
        assert_eq!(
            ports.list_ids(),
            vec!["book-2", "book-20", "book-21", "book-22", "book-23", "book-24"]
        );
        assert_eq!(ports.more, Some((false, 0)));
        assert!(!ports.is_open(Overlay::Search));
    }

    #[test]
    fn test_filter_without_matches_renders_empty_list() {
        let (mut app, mut ports) = started(25, 10);
        update(&mut app, filter("nonexistent-xyz"), &mut ports);
        assert!(ports.list.is_empty());
        assert_eq!(ports.more, Some((false, 0)));
        assert_eq!(app.status_message, "Showing 0 of 0");
    }

    #[test]
    fn test_rejected_filter_form_changes_nothing() {
        let (mut app, mut ports) = started(25, 10);
        update(&mut app, Action::LoadMore, &mut ports);
        let before = ports.list_ids();

        let form = FilterForm {
            genre: String::new(),
            ..Default::default()
        };
        update(&mut app, Action::SubmitFilter(form), &mut ports);
        assert_eq!(ports.list_ids(), before);
        assert_eq!(app.session.page(), 2);
    }

    #[test]
    fn test_filter_with_unknown_id_changes_nothing() {
        let (mut app, mut ports) = started(25, 10);
        update(&mut app, Action::OpenOverlay(Overlay::Search), &mut ports);

        let form = FilterForm {
            genre: "bogus-genre".to_string(),
            ..Default::default()
        };
        update(&mut app, Action::SubmitFilter(form), &mut ports);
        assert_eq!(app.session.match_count(), 25);
        assert_eq!(ports.list.len(), 10);
        assert_eq!(ports.more, Some((true, 15)));
        assert!(ports.is_open(Overlay::Search));
    }

    #[test]
    fn test_select_preview_opens_detail() {
        let (mut app, mut ports) = started(5, 10);
        update(&mut app, Action::SelectPreview("book-3".into()), &mut ports);
        let detail = ports.detail.as_ref().unwrap();
        assert_eq!(detail.title, "Book-3");
        assert!(detail.subtitle.starts_with("Author One ("));
        assert!(ports.is_open(Overlay::Detail));
        assert_eq!(app.active.as_deref(), Some("book-3"));

        update(&mut app, Action::CloseOverlay(Overlay::Detail), &mut ports);
        assert!(!ports.is_open(Overlay::Detail));
        assert!(app.active.is_none());
    }

    #[test]
    fn test_select_unknown_preview_is_noop() {
        let (mut app, mut ports) = started(5, 10);
        update(&mut app, Action::SelectPreview("nope".into()), &mut ports);
        assert!(ports.detail.is_none());
        assert!(!ports.is_open(Overlay::Detail));
        assert!(app.active.is_none());
    }

    #[test]
    fn test_settings_submit_applies_theme() {
        let (mut app, mut ports) = started(5, 10);
        update(&mut app, Action::OpenOverlay(Overlay::Settings), &mut ports);
        update(
            &mut app,
            Action::SubmitSettings(SettingsForm::new("night")),
            &mut ports,
        );
        assert_eq!(app.theme, Theme::Night);
        assert_eq!(ports.tokens, Some(Theme::Night.tokens()));
        assert!(!ports.is_open(Overlay::Settings));
    }

    #[test]
    fn test_settings_submit_rejects_unknown_theme() {
        let (mut app, mut ports) = started(5, 10);
        update(&mut app, Action::OpenOverlay(Overlay::Settings), &mut ports);
        update(
            &mut app,
            Action::SubmitSettings(SettingsForm::new("sepia")),
            &mut ports,
        );
        assert_eq!(app.theme, Theme::Day);
        assert_eq!(ports.tokens, Some(Theme::Day.tokens()));
        assert!(ports.is_open(Overlay::Settings));
    }

    #[test]
    fn test_quit_effect() {
        let (mut app, mut ports) = started(1, 10);
        assert_eq!(update(&mut app, Action::Quit, &mut ports), Effect::Quit);
        assert_eq!(update(&mut app, Action::LoadMore, &mut ports), Effect::None);
    }
}
