use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig, SourceSpec};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let SourceSpec::Json(path) = &config.source
		&& !path.is_file()
	{
		return Err(ConfigError::invalid(
			"source.input",
			path.display().to_string(),
			sources.source_for_input(),
			"must be an existing file",
		));
	}

	if let Some(theme) = &config.theme
		&& tracepick_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"picker.theme",
			theme.as_str(),
			sources.source_for_theme(),
			format!(
				"unknown theme (available: {})",
				tracepick_tui::style::names().join(", ")
			),
		));
	}

	if LevelFilter::from_str(&config.log.level).is_err() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log.level.as_str(),
			sources.source_for_log_level(),
			"expected one of off, error, warn, info, debug, trace",
		));
	}

	Ok(())
}
