use std::collections::VecDeque;

use super::*;
use crate::{MatchMode, StaticSource, collect_entries, filter_for_mode};

fn demo_picker() -> Picker<SubstringFilter> {
	let entries = collect_entries(&StaticSource::demo()).expect("entries");
	Picker::with_substring_filter(entries)
}

fn visible_names<F: EntryFilter>(picker: &Picker<F>) -> Vec<&str> {
	picker.visible_entries().map(Entry::name).collect()
}

/// Replays a fixed list of events and records what the picker showed.
#[derive(Default)]
struct ScriptedSurface {
	events: VecDeque<SurfaceEvent>,
	rows: usize,
	refreshes: Vec<(Vec<usize>, Option<usize>, bool)>,
}

impl ScriptedSurface {
	fn new(events: impl IntoIterator<Item = SurfaceEvent>) -> Self {
		Self {
			events: events.into_iter().collect(),
			..Self::default()
		}
	}
}

impl DisplaySurface for ScriptedSurface {
	fn set_rows(&mut self, rows: &[Entry]) {
		self.rows = rows.len();
	}

	fn refresh(&mut self, view: &PickerView<'_>) -> Result<(), SurfaceError> {
		self.refreshes
			.push((view.visible.to_vec(), view.selected, view.can_confirm));
		Ok(())
	}

	fn next_event(&mut self) -> Result<SurfaceEvent, SurfaceError> {
		self.events.pop_front().ok_or(SurfaceError::Closed)
	}
}

#[test]
fn new_picker_is_idle_with_everything_visible() {
	let picker = demo_picker();
	assert_eq!(picker.state(), PickerState::Idle);
	assert_eq!(picker.visible(), &[0, 1, 2]);
	assert!(picker.selected_entry().is_none());
	assert!(!picker.can_confirm());
}

#[test]
fn typing_moves_between_idle_and_filtering() {
	let mut picker = demo_picker();

	picker.set_query("cube");
	assert_eq!(picker.state(), PickerState::Filtering);
	assert_eq!(visible_names(&picker), vec!["vkcube"]);

	picker.set_query("");
	assert_eq!(picker.state(), PickerState::Idle);
	assert_eq!(picker.visible().len(), 3);
}

#[test]
fn filtering_to_nothing_is_a_normal_state() {
	let mut picker = demo_picker();
	picker.set_query("999");
	assert_eq!(picker.state(), PickerState::Filtering);
	assert!(picker.visible().is_empty());
	assert!(!picker.select(0));
	assert!(!picker.select_next());
}

#[test]
fn selecting_a_row_enables_confirm() {
	let mut picker = demo_picker();
	picker.set_query("vk");
	assert!(picker.select(1));
	assert_eq!(picker.state(), PickerState::Selected);
	assert!(picker.can_confirm());
	assert_eq!(picker.selected_entry().map(Entry::id), Some("254441"));
}

#[test]
fn typing_after_selection_clears_it() {
	let mut picker = demo_picker();
	picker.select(0);
	picker.set_query("vk");
	assert_eq!(picker.state(), PickerState::Filtering);
	assert!(picker.selected_entry().is_none());

	picker.select(0);
	picker.set_query("");
	assert_eq!(picker.state(), PickerState::Idle);
}

#[test]
fn selection_rows_refer_to_visible_rows() {
	let mut picker = demo_picker();
	picker.set_query("other");
	assert!(picker.select(0));
	assert_eq!(picker.selected_entry().map(Entry::name), Some("vkother"));
	assert!(!picker.select(1));
	assert_eq!(picker.selected_row(), Some(0));
}

#[test]
fn confirm_without_selection_is_ignored() {
	let mut picker = demo_picker();
	assert!(picker.confirm().is_none());
	assert_eq!(picker.state(), PickerState::Idle);
	assert!(picker.outcome().is_none());
}

#[test]
fn confirm_returns_the_selected_entry() {
	let mut picker = demo_picker();
	picker.set_query("proto");
	picker.select(0);
	let chosen = picker.confirm();
	assert_eq!(chosen, Some(Entry::new("234441", "vkproto")));
	assert_eq!(picker.state(), PickerState::Confirmed);

	let outcome = picker.outcome().expect("finished");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "proto");
	assert_eq!(outcome.selected(), Some(&Entry::new("234441", "vkproto")));
}

#[test]
fn cancel_finishes_without_selection() {
	let mut picker = demo_picker();
	picker.select(2);
	picker.cancel();
	let outcome = picker.outcome().expect("finished");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
	assert!(outcome.selected().is_none());
}

#[test]
fn terminal_states_absorb_further_input() {
	let mut picker = demo_picker();
	picker.cancel();
	picker.set_query("cube");
	assert!(!picker.select(0));
	assert!(picker.confirm().is_none());
	assert_eq!(picker.state(), PickerState::Cancelled);
	assert_eq!(picker.query(), "");
}

#[test]
fn selection_steps_through_visible_rows() {
	let mut picker = demo_picker();
	assert!(picker.select_next());
	assert_eq!(picker.selected_row(), Some(0));
	picker.select_next();
	picker.select_next();
	assert!(!picker.select_next());
	assert_eq!(picker.selected_row(), Some(2));
	picker.select_previous();
	assert_eq!(picker.selected_row(), Some(1));

	picker.set_query("vk");
	assert!(picker.select_previous());
	assert_eq!(picker.selected_row(), Some(2));
}

#[test]
fn paging_clamps_to_the_visible_rows() {
	let mut picker = demo_picker();
	assert!(picker.move_selection(10));
	assert_eq!(picker.selected_row(), Some(0));
	assert!(picker.move_selection(10));
	assert_eq!(picker.selected_row(), Some(2));
	assert!(picker.move_selection(-10));
	assert_eq!(picker.selected_row(), Some(0));
	assert!(!picker.move_selection(-1));

	picker.set_query("999");
	assert!(!picker.move_selection(1));
	assert_eq!(picker.state(), PickerState::Filtering);
}

#[test]
fn initial_filter_query_starts_in_filtering() {
	let entries = collect_entries(&StaticSource::demo()).expect("entries");
	let mut filter = filter_for_mode(MatchMode::Substring);
	filter.set_query("cube");
	let picker = Picker::new(entries, filter);
	assert_eq!(picker.state(), PickerState::Filtering);
	assert_eq!(visible_names(&picker), vec!["vkcube"]);
}

#[test]
fn drive_runs_until_confirmation() {
	let mut picker = demo_picker();
	let mut surface = ScriptedSurface::new([
		SurfaceEvent::QueryChanged("cube".into()),
		SurfaceEvent::Confirm,
		SurfaceEvent::MoveSelection(1),
		SurfaceEvent::Confirm,
	]);

	let outcome = picker.drive(&mut surface).expect("outcome");

	assert!(outcome.accepted);
	assert_eq!(outcome.selection, Some(Entry::new("254441", "vkcube")));
	assert_eq!(surface.rows, 3);
	assert_eq!(
		surface.refreshes,
		vec![
			(vec![0, 1, 2], None, false),
			(vec![1], None, false),
			(vec![1], None, false),
			(vec![1], Some(0), true),
		]
	);
}

#[test]
fn drive_reports_cancellation() {
	let mut picker = demo_picker();
	let mut surface = ScriptedSurface::new([
		SurfaceEvent::QueryChanged("vk".into()),
		SurfaceEvent::Cancel,
	]);
	let outcome = picker.drive(&mut surface).expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "vk");
}

#[test]
fn drive_propagates_surface_errors() {
	let mut picker = demo_picker();
	let mut surface = ScriptedSurface::new([SurfaceEvent::QueryChanged("vk".into())]);
	let err = picker.drive(&mut surface).unwrap_err();
	assert!(matches!(err, SurfaceError::Closed));
}
