//! UI building blocks shared across rendering and state modules.

/// Footer with key hints.
pub mod footer;
/// Input prompt rendering and match count.
pub mod prompt;
/// Table row construction and highlighting.
pub mod rows;
/// Table rendering and configuration.
pub mod tables;

pub use footer::render_footer;
pub use prompt::{InputContext, MatchStatus, render_input};
pub use tables::{TableSpec, TableTarget, render_table};
