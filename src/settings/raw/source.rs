use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, SettingSource, SourceSpec};
use super::super::util::expand_home;
use super::invalid;
use crate::cli::CliArgs;

const DEFAULT_FFX: &str = "ffx";

/// Where entries come from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) kind: Option<String>,
	pub(super) input: Option<PathBuf>,
	pub(super) ffx: Option<PathBuf>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(kind) = cli.source {
			self.kind = Some(kind.as_str().to_string());
		}
		if let Some(input) = cli.input.clone() {
			self.input = Some(input);
		}
		if let Some(ffx) = cli.ffx.clone() {
			self.ffx = Some(ffx);
		}
	}

	pub(super) fn resolve(
		self,
		sources: &ConfigSources,
		home: Option<&Path>,
	) -> Result<SourceSpec, ConfigError> {
		let kind = self
			.kind
			.as_deref()
			.map(str::trim)
			.map(str::to_ascii_lowercase);
		match kind.as_deref() {
			None | Some("demo") => Ok(SourceSpec::Demo),
			Some("json") => {
				let Some(input) = self.input else {
					return Err(ConfigError::invalid(
						"source.input",
						"(unset)",
						sources
							.source_kind
							.clone()
							.unwrap_or(SettingSource::ConfigKey("source.kind")),
						"an input file is required by the json source",
					));
				};
				Ok(SourceSpec::Json(expand_home(&input, home)))
			}
			Some("ffx") => {
				let program = self.ffx.unwrap_or_else(|| PathBuf::from(DEFAULT_FFX));
				Ok(SourceSpec::Ffx(expand_home(&program, home)))
			}
			Some(other) => Err(invalid(
				"source.kind",
				other,
				sources.source_kind.as_ref(),
				"expected one of demo, json, ffx",
			)),
		}
	}
}
