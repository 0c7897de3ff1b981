use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT: &str = "> ";

/// Inputs for rendering the query line.
pub struct InputContext<'a, 'q> {
	pub search_input: &'a QueryInput<'q>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Right-hand status of the query line.
pub struct MatchStatus<'a> {
	pub visible: usize,
	pub total: usize,
	/// Why the query could not be applied as typed, if it could not.
	pub problem: Option<&'a str>,
}

impl MatchStatus<'_> {
	fn text(&self) -> String {
		match self.problem {
			Some(problem) => format!("{problem} "),
			None => format!("{}/{} ", self.visible, self.total),
		}
	}
}

/// Render the prompt, the query editor and the match status.
pub fn render_input(frame: &mut Frame, input: InputContext<'_, '_>, status: MatchStatus<'_>) {
	let InputContext {
		search_input,
		area,
		theme,
	} = input;

	let status_text = status.text();
	let status_width = u16::try_from(status_text.width()).unwrap_or(u16::MAX);
	let prompt_width = u16::try_from(PROMPT.width()).unwrap_or(u16::MAX);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(status_width),
		])
		.split(area);

	frame.render_widget(
		Paragraph::new(Span::styled(PROMPT, theme.prompt)),
		horizontal[0],
	);
	search_input.render_textarea(frame, horizontal[1]);

	let status_style = if status.problem.is_some() {
		theme.error
	} else {
		theme.empty_style()
	};
	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(status_text, status_style))),
		horizontal[2],
	);
}
