use ratatui::style::{Color, Style};

/// A theme containing styles for the picker's UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for headers, borders and separators.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for the query prompt.
	pub prompt: Style,
	/// Style for placeholders, hints and empty states.
	pub empty: Style,
	/// Style for the matched part of a cell.
	pub highlight: Style,
	/// Style for problems with the typed query.
	pub error: Style,
}

impl Theme {
	/// Foreground used for borders, falling back to the terminal default.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Dimmed style for placeholder and hint text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}
}

/// Describes a theme instance and the names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
