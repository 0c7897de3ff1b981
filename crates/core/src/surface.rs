//! Capability interface between the picker and whatever draws it.

use std::ops::Range;

use crate::picker::PickerState;
use crate::{Entry, EntryFilter, SurfaceError};

/// User input reported by a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
	/// The search text changed to the contained value.
	QueryChanged(String),
	/// The user picked the row at this index among the visible rows.
	RowSelected(usize),
	/// The user stepped the selection by this many visible rows; negative is up.
	MoveSelection(isize),
	/// The user asked to accept the current selection.
	Confirm,
	/// The user dismissed the picker.
	Cancel,
}

/// Snapshot of picker state handed to a surface on every refresh.
pub struct PickerView<'a> {
	pub entries: &'a [Entry],
	/// Indices into `entries`, in display order.
	pub visible: &'a [usize],
	/// Selected row, as an index into `visible`.
	pub selected: Option<usize>,
	pub query: &'a str,
	pub state: PickerState,
	pub can_confirm: bool,
	pub filter: &'a dyn EntryFilter,
}

impl PickerView<'_> {
	/// Byte ranges of `text` matched by the active query.
	#[must_use]
	pub fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
		self.filter.match_ranges(text)
	}

	/// Reason the query could not be applied as typed.
	#[must_use]
	pub fn problem(&self) -> Option<&str> {
		self.filter.problem()
	}
}

/// A list display the picker can drive: it shows rows, hides the ones the
/// filter rejects, and reports what the user does.
pub trait DisplaySurface {
	/// Install the full row set. Called once before the first refresh.
	fn set_rows(&mut self, rows: &[Entry]);

	/// Re-evaluate row visibility, selection and confirm availability.
	fn refresh(&mut self, view: &PickerView<'_>) -> Result<(), SurfaceError>;

	/// Block until the user does something the picker must react to.
	fn next_event(&mut self) -> Result<SurfaceEvent, SurfaceError>;
}
