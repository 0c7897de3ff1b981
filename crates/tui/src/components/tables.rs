use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Scrollbar, ScrollbarOrientation,
	ScrollbarState, Table, TableState,
};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 2;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Everything needed to draw the results table once.
pub struct TableSpec<'a> {
	pub title: &'a str,
	pub headers: [&'a str; 2],
	pub widths: [Constraint; 2],
	pub rows: Vec<Row<'a>>,
	/// Shown centered below the header when `rows` is empty.
	pub empty_message: &'a str,
}

/// Mutable table state the renderer updates in place.
pub struct TableTarget<'s> {
	pub table_state: &'s mut TableState,
	pub scrollbar_state: &'s mut ScrollbarState,
	pub scrollbar_area: &'s mut Option<Rect>,
}

/// Render the bordered results table.
pub fn render_table(frame: &mut Frame, area: Rect, target: TableTarget<'_>, spec: TableSpec<'_>, theme: &Theme) {
	*target.scrollbar_area = None;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.border_style())
		.title(Line::from(Span::styled(format!(" {} ", spec.title), theme.header)));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let available_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let total_rows = spec.rows.len();
	let needs_scrollbar = available_rows > 0 && total_rows > available_rows;
	let table_area = if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};

	let header = Row::new(spec.headers.map(Cell::from))
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);
	let is_empty = spec.rows.is_empty();
	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, target.table_state);

	render_header_separator(frame, table_area, theme);

	if is_empty {
		render_empty_message(frame, inner, spec.empty_message, theme);
	}

	if needs_scrollbar {
		let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
			.begin_symbol(None)
			.end_symbol(None)
			.track_symbol(Some("│"))
			.style(theme.border_style());
		let scrollbar_area = Rect {
			x: inner.x + inner.width.saturating_sub(1),
			width: 1,
			..inner
		};
		*target.scrollbar_area = Some(scrollbar_area);
		frame.render_stateful_widget(scrollbar, scrollbar_area, target.scrollbar_state);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let separator = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled("─".repeat(usize::from(area.width) - 2), theme.border_style()),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), separator);
}

fn render_empty_message(frame: &mut Frame, inner: Rect, message: &str, theme: &Theme) {
	if inner.height <= TABLE_HEADER_ROWS {
		return;
	}
	let message_area = Rect {
		y: inner.y + TABLE_HEADER_ROWS,
		height: inner.height - TABLE_HEADER_ROWS,
		..inner
	};
	let empty = Paragraph::new(message)
		.style(theme.empty_style())
		.alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}
