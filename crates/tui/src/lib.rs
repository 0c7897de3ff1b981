//! Terminal display surface for the `tracepick` picker.
//!
//! [`TerminalSurface`] implements [`tracepick_core::DisplaySurface`] on top of
//! ratatui: a query line, a two-column table of identifiers and names with the
//! matched text highlighted, and a footer with key hints.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::App;
pub use config::UiLabels;
pub use runtime::{TerminalSurface, run};

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, builtin_themes, by_name, default_theme};
