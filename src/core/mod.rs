//! # Core Application Logic
//!
//! This module contains Folio's browse logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (data)       │
//!                    │  • BrowseSession        │
//!                    │  • Renderer (pure)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No I/O    │
//!                    │  past startup loading.  │
//!                    └───────────┬─────────────┘
//!                                │ Presenter ports
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Tests    │
//!             │  Adapter   │          │ (recorder) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: books and the author/genre lookups
//! - [`filter`]: `FilterCriteria` and its match predicates
//! - [`browse`]: `BrowseSession`, matches plus page cursor
//! - [`render`]: records → previews, option lists, detail view
//! - [`form`]: raw form values and their fail-closed parsing
//! - [`theme`]: day/night themes and color tokens
//! - [`ports`]: the `Presenter` trait
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod browse;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod form;
pub mod ports;
pub mod render;
pub mod state;
pub mod theme;
