use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::super::resolved::LogSettings;
use super::super::util::expand_home;
use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";

/// Logging options as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn resolve(self, home: Option<&Path>) -> LogSettings {
		LogSettings {
			file: self.file.map(|file| expand_home(&file, home)),
			level: self
				.level
				.map(|level| level.trim().to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
		}
	}
}
