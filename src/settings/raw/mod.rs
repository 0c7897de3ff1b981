use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use super::sources::ConfigLayers;

mod logging;
mod picker;
mod source;

use logging::LoggingSection;
use picker::PickerSection;
use source::SourceSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	picker: PickerSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.source.apply_cli_overrides(cli);
		self.picker.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs, layers: &ConfigLayers) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			source_kind: detect_source(
				layers,
				cli.source.is_some(),
				self.source.kind.is_some(),
				"TRACEPICK__SOURCE__KIND",
				"--source",
				"source.kind",
			),
			source_input: detect_source(
				layers,
				cli.input.is_some(),
				self.source.input.is_some(),
				"TRACEPICK__SOURCE__INPUT",
				"--input",
				"source.input",
			),
			match_mode: detect_source(
				layers,
				cli.match_mode.is_some(),
				self.picker.match_mode.is_some(),
				"TRACEPICK__PICKER__MATCH_MODE",
				"--match-mode",
				"picker.match_mode",
			),
			theme: detect_source(
				layers,
				cli.theme.is_some(),
				self.picker.theme.is_some(),
				"TRACEPICK__PICKER__THEME",
				"--theme",
				"picker.theme",
			),
			log_level: detect_source(
				layers,
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"TRACEPICK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let home = env::var_os("HOME").map(std::path::PathBuf::from);
		let source = self.source.resolve(&sources, home.as_deref())?;
		let picker = self.picker.resolve(&sources)?;
		let log = self.logging.resolve(home.as_deref());

		let config = ResolvedConfig {
			source,
			match_mode: picker.match_mode,
			initial_query: picker.initial_query,
			theme: picker.theme,
			labels: picker.labels,
			log,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	layers: &ConfigLayers,
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if layers.env_sets(env_var) {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

/// Wrap a parse failure of `value` into a [`ConfigError`] for `key`.
fn invalid(
	key: &'static str,
	value: &str,
	origin: Option<&SettingSource>,
	reason: impl Into<String>,
) -> ConfigError {
	let origin = origin.cloned().unwrap_or(SettingSource::ConfigKey(key));
	ConfigError::invalid(key, value, origin, reason)
}

#[cfg(test)]
mod tests;
