use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Render the key hints, followed by the entry Enter would confirm.
pub fn render_footer(frame: &mut Frame, area: Rect, hint: &str, confirmable: Option<&str>, theme: &Theme) {
	let mut spans = vec![Span::styled(hint.to_string(), theme.empty_style())];
	if let Some(name) = confirmable {
		spans.push(Span::raw("  "));
		spans.push(Span::styled(format!("→ {name}"), theme.prompt));
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
