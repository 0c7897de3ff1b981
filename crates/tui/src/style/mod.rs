//! Visual styling for the picker.
//!
//! Themes are plain color schemes; [`StyleConfig`] is where any styling knob
//! that is not a color belongs.

pub mod theme;

pub use theme::{Theme, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Create a style configuration around `theme`.
	#[must_use]
	pub fn new(theme: Theme) -> Self {
		Self { theme }
	}
}
