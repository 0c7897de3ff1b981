use anyhow::{Context, Result, anyhow};
use tracepick_core::ffx::FfxTargetSource;
use tracepick_core::{
	Entry, EntrySource, JsonSource, MatchMode, Picker, PickerOutcome, StaticSource,
	collect_entries, filter_for_mode,
};
use tracepick_tui::{StyleConfig, UiLabels, by_name, default_theme};

use crate::settings::{ResolvedConfig, SourceSpec};

type BoxedSource = Box<dyn EntrySource<Iter = std::vec::IntoIter<Entry>>>;

/// Coordinates loading entries and running the picker over them.
pub(crate) struct PickerWorkflow {
	source: BoxedSource,
	source_label: String,
	match_mode: MatchMode,
	initial_query: String,
	labels: UiLabels,
	style: StyleConfig,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			source,
			match_mode,
			initial_query,
			theme,
			labels,
			log: _,
		} = config;

		let theme = match theme {
			Some(name) => by_name(&name).ok_or_else(|| anyhow!("unknown theme '{name}'"))?,
			None => default_theme(),
		};

		Ok(Self {
			source_label: source.to_string(),
			source: build_source(source),
			match_mode,
			initial_query,
			labels,
			style: StyleConfig::new(theme),
		})
	}

	/// Open the picker full-screen and wait for the user's choice.
	pub(crate) fn run(self) -> Result<PickerOutcome> {
		let mut picker = self.load_picker()?;
		tracing::info!(
			source = %self.source_label,
			entries = picker.entries().len(),
			mode = %self.match_mode,
			"opening picker"
		);
		let outcome = tracepick_tui::run(&mut picker, self.labels, self.style)?;
		Ok(outcome)
	}

	/// Entries the initial query lets through, without any interaction.
	pub(crate) fn list(&self) -> Result<Vec<Entry>> {
		let picker = self.load_picker()?;
		Ok(picker.visible_entries().cloned().collect())
	}

	fn load_picker(&self) -> Result<Picker> {
		let entries = collect_entries(self.source.as_ref())
			.with_context(|| format!("failed to load entries from {}", self.source_label))?;
		let mut filter = filter_for_mode(self.match_mode);
		filter.set_query(&self.initial_query);
		Ok(Picker::new(entries, filter))
	}
}

fn build_source(spec: SourceSpec) -> BoxedSource {
	match spec {
		SourceSpec::Demo => Box::new(StaticSource::demo()),
		SourceSpec::Json(path) => Box::new(JsonSource::new(path)),
		SourceSpec::Ffx(program) => Box::new(FfxTargetSource::new(program)),
	}
}
