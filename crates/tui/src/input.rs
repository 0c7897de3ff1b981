//! Single-line query editor.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text input holding the picker query.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: &str) -> Self {
		let mut textarea = TextArea::new(vec![initial.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the text, keeping placeholder and styling.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(text);
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	/// Feed a key to the editor. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_newline(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_and_deleting_reports_changes() {
		let mut input = QueryInput::default();
		assert!(input.input(key(KeyCode::Char('v'))));
		assert!(input.input(key(KeyCode::Char('k'))));
		assert_eq!(input.text(), "vk");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "v");
	}

	#[test]
	fn cursor_movement_is_not_a_change() {
		let mut input = QueryInput::new("cube");
		assert!(!input.input(key(KeyCode::Left)));
		assert_eq!(input.text(), "cube");
	}

	#[test]
	fn newlines_never_enter_the_query() {
		let mut input = QueryInput::new("vk");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "vk");
	}

	#[test]
	fn set_text_replaces_the_query() {
		let mut input = QueryInput::new("vk");
		input.set_text("proto");
		assert_eq!(input.text(), "proto");
		input.set_text("");
		assert_eq!(input.text(), "");
	}
}
