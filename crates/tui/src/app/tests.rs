use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracepick_core::{
	Entry, MatchMode, Picker, StaticSource, SurfaceEvent, collect_entries, filter_for_mode,
};

use super::App;
use crate::config::UiLabels;
use crate::style::StyleConfig;

fn demo_picker(mode: MatchMode) -> Picker {
	let entries = collect_entries(&StaticSource::demo()).expect("entries");
	Picker::new(entries, filter_for_mode(mode))
}

fn app_for(picker: &Picker) -> App<'static> {
	let mut app = App::new(UiLabels::default(), StyleConfig::default());
	app.set_rows(picker.entries());
	app.apply_view(&picker.view());
	app
}

fn render(app: &mut App<'_>) -> String {
	let backend = TestBackend::new(60, 12);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

#[test]
fn renders_headers_and_every_row() {
	let picker = demo_picker(MatchMode::Substring);
	let screen = render(&mut app_for(&picker));

	assert!(screen.contains("Global ID"));
	assert!(screen.contains("Component Name"));
	for name in ["vkproto", "vkcube", "vkother"] {
		assert!(screen.contains(name), "{name} missing:\n{screen}");
	}
	assert!(screen.contains("234441"));
	assert!(screen.contains("3/3"));
	assert!(!screen.contains("No results"));
	insta::assert_snapshot!("full_listing", screen);
}

#[test]
fn empty_filter_result_shows_placeholder_message() {
	let mut picker = demo_picker(MatchMode::Substring);
	picker.set_query("999");
	let screen = render(&mut app_for(&picker));

	assert!(screen.contains("No results"));
	assert!(screen.contains("0/3"));
	assert!(!screen.contains("vkcube"));
	insta::assert_snapshot!("empty_result", screen);
}

#[test]
fn selected_row_is_marked_and_named_in_footer() {
	let mut picker = demo_picker(MatchMode::Substring);
	picker.select(1);
	let screen = render(&mut app_for(&picker));

	let marked = screen
		.lines()
		.find(|line| line.contains("▶"))
		.expect("highlighted row");
	assert!(marked.contains("vkcube"));
	assert!(screen.lines().last().is_some_and(|line| line.contains("→ vkcube")));
	insta::assert_snapshot!("selected_row", screen);
}

#[test]
fn invalid_pattern_is_reported_on_the_query_line() {
	let mut picker = demo_picker(MatchMode::Pattern);
	picker.set_query("vk(");
	let screen = render(&mut app_for(&picker));

	let query_line = screen.lines().next().expect("query line");
	assert!(query_line.contains("vk("));
	assert!(query_line.contains("invalid pattern"));
	assert!(screen.contains("No results"));
	insta::assert_snapshot!("invalid_pattern", screen);
}

#[test]
fn initial_query_is_shown_in_the_editor() {
	let mut filter = filter_for_mode(MatchMode::Substring);
	filter.set_query("cube");
	let entries = collect_entries(&StaticSource::demo()).expect("entries");
	let picker = Picker::new(entries, filter);
	let app = app_for(&picker);
	assert_eq!(app.query(), "cube");
	assert_eq!(app.visible_len(), 1);
}

#[test]
fn typing_reports_the_whole_query() {
	let picker = demo_picker(MatchMode::Substring);
	let mut app = app_for(&picker);
	assert_eq!(
		app.handle_key(key(KeyCode::Char('v'))),
		Some(SurfaceEvent::QueryChanged("v".into()))
	);
	assert_eq!(
		app.handle_key(key(KeyCode::Char('k'))),
		Some(SurfaceEvent::QueryChanged("vk".into()))
	);
	assert_eq!(app.handle_key(key(KeyCode::Left)), None);
}

#[test]
fn control_keys_map_to_confirm_and_cancel() {
	let picker = demo_picker(MatchMode::Substring);
	let mut app = app_for(&picker);
	assert_eq!(app.handle_key(key(KeyCode::Enter)), Some(SurfaceEvent::Confirm));
	assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(SurfaceEvent::Cancel));
	assert_eq!(
		app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
		Some(SurfaceEvent::Cancel)
	);
	assert_eq!(app.query(), "");
}

#[test]
fn arrow_keys_step_through_visible_rows() {
	let mut picker = demo_picker(MatchMode::Substring);
	let mut app = app_for(&picker);

	let mut press = |app: &mut App<'static>, code: KeyCode| {
		let event = app.handle_key(key(code)).expect("navigation event");
		picker.handle(event);
		app.apply_view(&picker.view());
	};

	assert_eq!(app.handle_key(key(KeyCode::Down)), Some(SurfaceEvent::MoveSelection(1)));
	assert_eq!(app.handle_key(key(KeyCode::Up)), Some(SurfaceEvent::MoveSelection(-1)));
	assert_eq!(app.handle_key(key(KeyCode::End)), Some(SurfaceEvent::RowSelected(2)));

	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Down);
	assert_eq!(app.selected, Some(1));
	press(&mut app, KeyCode::Up);
	press(&mut app, KeyCode::Up);
	assert_eq!(app.selected, Some(0));
	press(&mut app, KeyCode::End);
	press(&mut app, KeyCode::Down);
	assert_eq!(app.selected, Some(2));
	assert_eq!(app.confirmable_entry().map(Entry::name), Some("vkother"));
}

#[test]
fn page_keys_step_by_the_visible_height() {
	let mut picker = demo_picker(MatchMode::Substring);
	let mut app = app_for(&picker);
	render(&mut app);

	// 10 result lines minus the border, header and separator.
	let event = app.handle_key(key(KeyCode::PageDown)).expect("page");
	assert_eq!(event, SurfaceEvent::MoveSelection(6));
	picker.handle(event);
	assert_eq!(picker.selected_row(), Some(0));
	picker.handle(SurfaceEvent::MoveSelection(6));
	assert_eq!(picker.selected_row(), Some(2));
	assert_eq!(app.handle_key(key(KeyCode::PageUp)), Some(SurfaceEvent::MoveSelection(-6)));
}

#[test]
fn navigation_without_rows_does_nothing() {
	let mut picker = demo_picker(MatchMode::Substring);
	picker.set_query("999");
	let mut app = app_for(&picker);
	assert_eq!(app.handle_key(key(KeyCode::Down)), None);
	assert_eq!(app.handle_key(key(KeyCode::Home)), None);
}

#[test]
fn clicking_a_row_selects_it() {
	let picker = demo_picker(MatchMode::Substring);
	let mut app = app_for(&picker);
	render(&mut app);

	// Border at y=1, header at y=2, separator at y=3, first row at y=4.
	assert_eq!(app.handle_mouse(click(10, 5)), Some(SurfaceEvent::RowSelected(1)));
	assert_eq!(app.handle_mouse(click(10, 2)), None);
	assert_eq!(app.handle_mouse(click(10, 9)), None);
}
