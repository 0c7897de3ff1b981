//! Display-side model of the picker.
//!
//! [`App`] mirrors whatever the picker last reported through
//! [`App::apply_view`] and turns terminal input into [`SurfaceEvent`]s. It never
//! changes the selection or the query on its own; the picker decides and the
//! next refresh brings the change back.
//!
//! [`SurfaceEvent`]: tracepick_core::SurfaceEvent

mod actions;
mod render;
mod results;

use tracepick_core::{Entry, PickerView};

use crate::components::rows::MatchedRow;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::StyleConfig;
use results::ResultsState;

/// Terminal picker state: rows, the last view, and widget state.
pub struct App<'a> {
	pub(crate) entries: Vec<Entry>,
	pub(crate) matched: Vec<MatchedRow>,
	pub(crate) selected: Option<usize>,
	pub(crate) can_confirm: bool,
	pub(crate) problem: Option<String>,
	pub(crate) search_input: QueryInput<'a>,
	pub(crate) results: ResultsState,
	pub(crate) labels: UiLabels,
	pub(crate) style: StyleConfig,
}

impl<'a> App<'a> {
	#[must_use]
	pub fn new(labels: UiLabels, style: StyleConfig) -> Self {
		let mut search_input = QueryInput::default();
		search_input.set_placeholder(labels.filter_placeholder.clone(), style.theme.empty_style());
		Self {
			entries: Vec::new(),
			matched: Vec::new(),
			selected: None,
			can_confirm: false,
			problem: None,
			search_input,
			results: ResultsState::default(),
			labels,
			style,
		}
	}

	/// Install the full row set.
	pub fn set_rows(&mut self, rows: &[Entry]) {
		self.entries = rows.to_vec();
		self.matched.clear();
		self.selected = None;
		self.results.sync_selection(None, 0);
	}

	/// Mirror the picker's current state.
	pub fn apply_view(&mut self, view: &PickerView<'_>) {
		self.matched = view
			.visible
			.iter()
			.filter_map(|&index| {
				let entry = view.entries.get(index)?;
				Some(MatchedRow {
					index,
					id_ranges: view.match_ranges(entry.id()),
					name_ranges: view.match_ranges(entry.name()),
				})
			})
			.collect();
		self.selected = view.selected.filter(|&row| row < self.matched.len());
		self.can_confirm = view.can_confirm;
		self.problem = view.problem().map(str::to_string);
		self.search_input.set_text(view.query);
		self.results.sync_selection(self.selected, self.matched.len());
	}

	/// Current text of the query editor.
	#[must_use]
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Number of rows currently shown.
	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.matched.len()
	}

	/// Entry at visible row `row`.
	#[must_use]
	pub fn visible_entry(&self, row: usize) -> Option<&Entry> {
		let matched = self.matched.get(row)?;
		self.entries.get(matched.index)
	}

	/// Entry Enter would confirm, if confirming is currently possible.
	#[must_use]
	pub fn confirmable_entry(&self) -> Option<&Entry> {
		if !self.can_confirm {
			return None;
		}
		self.visible_entry(self.selected?)
	}
}

#[cfg(test)]
mod tests;
