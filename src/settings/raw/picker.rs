use serde::Deserialize;
use tracepick_core::MatchMode;
use tracepick_tui::UiLabels;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::sanitize_label;
use super::invalid;
use crate::cli::CliArgs;

/// Picker behaviour and labels prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) query: Option<String>,
	pub(super) match_mode: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) filter_placeholder: Option<String>,
	pub(super) id_header: Option<String>,
	pub(super) name_header: Option<String>,
}

pub(super) struct PickerResolution {
	pub(super) match_mode: MatchMode,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
	pub(super) labels: UiLabels,
}

impl PickerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.query = Some(query);
		}
		if let Some(mode) = cli.match_mode {
			self.match_mode = Some(mode.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(header) = cli.id_header.clone() {
			self.id_header = Some(header);
		}
		if let Some(header) = cli.name_header.clone() {
			self.name_header = Some(header);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<PickerResolution, ConfigError> {
		let match_mode = match self.match_mode.as_deref() {
			Some(value) => value.parse::<MatchMode>().map_err(|err| {
				invalid(
					"picker.match_mode",
					value,
					sources.match_mode.as_ref(),
					err.to_string(),
				)
			})?,
			None => MatchMode::default(),
		};

		let mut labels = UiLabels::default();
		if let Some(title) = sanitize_label(self.title) {
			labels.title = title;
		}
		if let Some(placeholder) = sanitize_label(self.filter_placeholder) {
			labels.filter_placeholder = placeholder;
		}
		if let Some(header) = sanitize_label(self.id_header) {
			labels.id_header = header;
		}
		if let Some(header) = sanitize_label(self.name_header) {
			labels.name_header = header;
		}

		Ok(PickerResolution {
			match_mode,
			initial_query: self.query.unwrap_or_default(),
			theme: sanitize_label(self.theme),
			labels,
		})
	}
}
