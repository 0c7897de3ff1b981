use std::fmt;
use std::path::PathBuf;

use tracepick_core::MatchMode;
use tracepick_tui::UiLabels;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// The entry source selected by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
	/// Built-in sample components.
	Demo,
	/// JSON entry file.
	Json(PathBuf),
	/// `ffx target list`, run through the given executable.
	Ffx(PathBuf),
}

impl fmt::Display for SourceSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SourceSpec::Demo => f.write_str("demo"),
			SourceSpec::Json(path) => write!(f, "json ({})", path.display()),
			SourceSpec::Ffx(program) => write!(f, "ffx ({})", program.display()),
		}
	}
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	/// Explicit log file; the data directory default applies when unset.
	pub file: Option<PathBuf>,
	pub level: String,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: SourceSpec,
	pub match_mode: MatchMode,
	pub initial_query: String,
	pub theme: Option<String>,
	pub labels: UiLabels,
	pub log: LogSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}

#[cfg(test)]
pub(crate) fn test_config() -> ResolvedConfig {
	ResolvedConfig {
		source: SourceSpec::Demo,
		match_mode: MatchMode::Substring,
		initial_query: String::new(),
		theme: None,
		labels: UiLabels::default(),
		log: LogSettings {
			file: None,
			level: "info".into(),
		},
	}
}
