//! The target picker state machine.
//!
//! A [`Picker`] owns the listing and a single filter. Each query change is
//! pushed into the filter and followed by a full visibility pass over the
//! entries, which keeps the filter itself free of any refresh mechanism.
//!
//! ```text
//! Idle <-> Filtering --select--> Selected --confirm--> Confirmed
//!   \__________\_____________________\______cancel___> Cancelled
//! ```

use std::fmt;

use serde::Serialize;

use crate::surface::{DisplaySurface, PickerView, SurfaceEvent};
use crate::{Entry, EntryFilter, SubstringFilter, SurfaceError};

/// Lifecycle of a picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
	/// Shown with an empty query and nothing selected.
	Idle,
	/// A non-empty query narrows the visible rows.
	Filtering,
	/// A row is selected and may be confirmed.
	Selected,
	/// The user accepted the selection.
	Confirmed,
	/// The user dismissed the picker.
	Cancelled,
}

impl PickerState {
	#[must_use]
	pub fn is_terminal(self) -> bool {
		matches!(self, PickerState::Confirmed | PickerState::Cancelled)
	}
}

impl fmt::Display for PickerState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			PickerState::Idle => "idle",
			PickerState::Filtering => "filtering",
			PickerState::Selected => "selected",
			PickerState::Confirmed => "confirmed",
			PickerState::Cancelled => "cancelled",
		};
		f.write_str(label)
	}
}

/// Result handed back to whoever opened the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOutcome {
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Entry>,
}

impl PickerOutcome {
	/// Return the chosen entry when the picker was confirmed.
	#[must_use]
	pub fn selected(&self) -> Option<&Entry> {
		if self.accepted {
			self.selection.as_ref()
		} else {
			None
		}
	}
}

/// Modal selection over a list of entries.
pub struct Picker<F = Box<dyn EntryFilter>> {
	entries: Vec<Entry>,
	filter: F,
	visible: Vec<usize>,
	selected: Option<usize>,
	state: PickerState,
}

impl Picker<SubstringFilter> {
	/// Build a picker that uses literal substring matching.
	#[must_use]
	pub fn with_substring_filter(entries: Vec<Entry>) -> Self {
		Self::new(entries, SubstringFilter::new())
	}
}

impl<F: EntryFilter> Picker<F> {
	/// Build a picker over `entries`. A query already held by `filter` is
	/// honoured as the initial query.
	pub fn new(entries: Vec<Entry>, filter: F) -> Self {
		let state = if filter.query().is_empty() {
			PickerState::Idle
		} else {
			PickerState::Filtering
		};
		let mut picker = Self {
			entries,
			filter,
			visible: Vec::new(),
			selected: None,
			state,
		};
		picker.refresh();
		picker
	}

	#[must_use]
	pub fn state(&self) -> PickerState {
		self.state
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.filter.query()
	}

	#[must_use]
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Indices into [`Picker::entries`] of the rows that are currently shown.
	#[must_use]
	pub fn visible(&self) -> &[usize] {
		&self.visible
	}

	pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
		self.visible.iter().map(|&index| &self.entries[index])
	}

	/// Selected row as an index into [`Picker::visible`].
	#[must_use]
	pub fn selected_row(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn selected_entry(&self) -> Option<&Entry> {
		let row = self.selected?;
		self.visible.get(row).map(|&index| &self.entries[index])
	}

	#[must_use]
	pub fn can_confirm(&self) -> bool {
		self.state == PickerState::Selected
	}

	/// Push a new query into the filter and re-evaluate every entry.
	///
	/// Clears the selection: the previously selected row may no longer be
	/// visible, and confirming must follow an explicit choice.
	pub fn set_query(&mut self, text: &str) {
		if self.ignore_when_finished("set_query") {
			return;
		}
		self.filter.set_query(text);
		self.refresh();
		self.selected = None;
		self.state = if text.is_empty() {
			PickerState::Idle
		} else {
			PickerState::Filtering
		};
		tracing::trace!(query = text, visible = self.visible.len(), "query applied");
	}

	/// Recompute which entries the filter lets through.
	pub fn refresh(&mut self) {
		let filter = &self.filter;
		self.visible = self
			.entries
			.iter()
			.enumerate()
			.filter(|(_, entry)| filter.matches(entry))
			.map(|(index, _)| index)
			.collect();
		if let Some(row) = self.selected
			&& row >= self.visible.len()
		{
			self.selected = None;
			if self.state == PickerState::Selected {
				self.state = self.unselected_state();
			}
		}
	}

	/// Select the visible row at `row`. Returns whether the selection changed.
	pub fn select(&mut self, row: usize) -> bool {
		if self.ignore_when_finished("select") {
			return false;
		}
		if row >= self.visible.len() {
			tracing::debug!(row, visible = self.visible.len(), "ignoring selection past the end");
			return false;
		}
		self.selected = Some(row);
		self.state = PickerState::Selected;
		true
	}

	/// Step the selection `delta` visible rows, clamped to the first and last
	/// row. Without a selection, stepping down starts at the top and stepping
	/// up at the bottom. Returns whether the selection changed.
	pub fn move_selection(&mut self, delta: isize) -> bool {
		let Some(last) = self.visible.len().checked_sub(1) else {
			return false;
		};
		let row = match self.selected {
			Some(row) => row.saturating_add_signed(delta).min(last),
			None if delta < 0 => last,
			None => 0,
		};
		if self.selected == Some(row) {
			return false;
		}
		self.select(row)
	}

	/// Move the selection one visible row down.
	pub fn select_next(&mut self) -> bool {
		self.move_selection(1)
	}

	/// Move the selection one visible row up.
	pub fn select_previous(&mut self) -> bool {
		self.move_selection(-1)
	}

	/// Accept the current selection. Without one, nothing happens.
	pub fn confirm(&mut self) -> Option<Entry> {
		if self.ignore_when_finished("confirm") {
			return None;
		}
		if !self.can_confirm() {
			tracing::debug!(state = %self.state, "confirm ignored without a selection");
			return None;
		}
		let entry = self.selected_entry().cloned();
		self.state = PickerState::Confirmed;
		entry
	}

	/// Dismiss the picker without choosing anything.
	pub fn cancel(&mut self) {
		if self.ignore_when_finished("cancel") {
			return;
		}
		self.state = PickerState::Cancelled;
	}

	/// The final result, once the picker reached a terminal state.
	#[must_use]
	pub fn outcome(&self) -> Option<PickerOutcome> {
		match self.state {
			PickerState::Confirmed => Some(PickerOutcome {
				accepted: true,
				query: self.query().to_string(),
				selection: self.selected_entry().cloned(),
			}),
			PickerState::Cancelled => Some(PickerOutcome {
				accepted: false,
				query: self.query().to_string(),
				selection: None,
			}),
			_ => None,
		}
	}

	/// Apply one surface event.
	pub fn handle(&mut self, event: SurfaceEvent) {
		match event {
			SurfaceEvent::QueryChanged(text) => self.set_query(&text),
			SurfaceEvent::RowSelected(row) => {
				self.select(row);
			}
			SurfaceEvent::MoveSelection(delta) => {
				self.move_selection(delta);
			}
			SurfaceEvent::Confirm => {
				self.confirm();
			}
			SurfaceEvent::Cancel => self.cancel(),
		}
	}

	#[must_use]
	pub fn view(&self) -> PickerView<'_> {
		PickerView {
			entries: &self.entries,
			visible: &self.visible,
			selected: self.selected,
			query: self.filter.query(),
			state: self.state,
			can_confirm: self.can_confirm(),
			filter: &self.filter,
		}
	}

	/// Run the session on `surface` until the user confirms or cancels.
	pub fn drive<S: DisplaySurface + ?Sized>(
		&mut self,
		surface: &mut S,
	) -> Result<PickerOutcome, SurfaceError> {
		surface.set_rows(&self.entries);
		loop {
			if let Some(outcome) = self.outcome() {
				tracing::info!(
					accepted = outcome.accepted,
					selection = ?outcome.selection.as_ref().map(Entry::id),
					"picker finished"
				);
				return Ok(outcome);
			}
			surface.refresh(&self.view())?;
			let event = surface.next_event()?;
			tracing::trace!(?event, "surface event");
			self.handle(event);
		}
	}

	fn unselected_state(&self) -> PickerState {
		if self.filter.query().is_empty() {
			PickerState::Idle
		} else {
			PickerState::Filtering
		}
	}

	fn ignore_when_finished(&self, operation: &str) -> bool {
		if self.state.is_terminal() {
			tracing::debug!(operation, state = %self.state, "picker already finished");
			return true;
		}
		false
	}
}

#[cfg(test)]
mod tests;
