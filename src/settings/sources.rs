use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File, Map};
use tracepick::app_dirs;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "TRACEPICK";
const ENV_SEPARATOR: &str = "__";

/// Inputs a configuration is assembled from, lowest precedence first.
///
/// The `TRACEPICK__*` variables are captured once so the same snapshot feeds
/// both the merged values and the origin reported in validation errors.
/// Environment values stay strings: queries and labels must survive
/// verbatim, so `0042` is never read back as `42`.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConfigLayers {
	discovered: Vec<PathBuf>,
	explicit: Vec<PathBuf>,
	environment: Map<String, String>,
}

impl ConfigLayers {
	pub(super) fn from_cli(cli: &CliArgs) -> Self {
		let discovered = if cli.no_config {
			Vec::new()
		} else {
			let config_dir = app_dirs::get_config_dir().ok();
			let working_dir = env::current_dir().ok();
			default_config_files(config_dir.as_deref(), working_dir.as_deref())
		};

		let vars = env::vars_os()
			.filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));

		Self {
			discovered,
			explicit: cli.config.clone(),
			environment: prefixed_vars(vars),
		}
	}

	#[cfg(test)]
	pub(crate) fn with_environment(mut self, vars: &[(&str, &str)]) -> Self {
		self.environment = prefixed_vars(
			vars.iter()
				.map(|(key, value)| ((*key).to_string(), (*value).to_string())),
		);
		self
	}

	/// Whether the captured environment sets the variable `name`.
	pub(super) fn env_sets(&self, name: &str) -> bool {
		self.environment.contains_key(name)
	}

	pub(super) fn build(&self) -> Result<Config> {
		let mut builder = Config::builder();

		for path in &self.discovered {
			builder = builder.add_source(File::from(path.clone()).required(false));
		}
		for path in &self.explicit {
			builder = builder.add_source(File::from(path.clone()).required(true));
		}

		builder = builder.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator(ENV_SEPARATOR)
				.source(Some(self.environment.clone())),
		);

		builder.build().map_err(|err| match err {
			ConfigError::Frozen => anyhow!("configuration builder is frozen"),
			other => other.into(),
		})
	}
}

fn prefixed_vars(vars: impl Iterator<Item = (String, String)>) -> Map<String, String> {
	let prefix = format!("{ENV_PREFIX}{ENV_SEPARATOR}").to_ascii_lowercase();
	vars.filter(|(key, _)| key.to_ascii_lowercase().starts_with(&prefix))
		.collect()
}

/// Config files consulted when `--no-config` is absent: the user's
/// `config.toml` first, then the working directory's dotfile and plain file.
pub(super) fn default_config_files(
	config_dir: Option<&Path>,
	working_dir: Option<&Path>,
) -> Vec<PathBuf> {
	let mut files = Vec::new();
	if let Some(dir) = config_dir {
		files.push(dir.join("config.toml"));
	}
	if let Some(dir) = working_dir {
		files.extend([dir.join(".tracepick.toml"), dir.join("tracepick.toml")]);
	}
	files
}
