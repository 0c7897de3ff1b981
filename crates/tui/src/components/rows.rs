use std::mem;
use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Row};
use tracepick_core::Entry;

/// A visible entry together with the parts of each column the query matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRow {
	/// Index of the entry in the full row set.
	pub index: usize,
	pub id_ranges: Vec<Range<usize>>,
	pub name_ranges: Vec<Range<usize>>,
}

/// Build table rows for the visible entries.
#[must_use]
pub fn build_entry_rows<'a>(
	matched: &'a [MatchedRow],
	entries: &'a [Entry],
	highlight_style: Style,
) -> Vec<Row<'a>> {
	matched
		.iter()
		.filter_map(|row| {
			let entry = entries.get(row.index)?;
			Some(Row::new([
				highlight_cell(entry.id(), &row.id_ranges, highlight_style),
				highlight_cell(entry.name(), &row.name_ranges, highlight_style),
			]))
		})
		.collect()
}

/// Build a cell that styles the byte `ranges` of `text` with `highlight_style`.
#[must_use]
pub fn highlight_cell<'a>(text: &'a str, ranges: &[Range<usize>], highlight_style: Style) -> Cell<'a> {
	if ranges.is_empty() {
		return Cell::from(text);
	}
	Cell::from(Text::from(Line::from(highlight_spans(text, ranges, highlight_style))))
}

/// Split `text` into alternating plain and highlighted spans.
#[must_use]
pub fn highlight_spans(text: &str, ranges: &[Range<usize>], highlight_style: Style) -> Vec<Span<'static>> {
	let mut spans = Vec::new();
	let mut buffer = String::new();
	let mut highlighted = false;

	for (offset, ch) in text.char_indices() {
		let should_highlight = ranges.iter().any(|range| range.contains(&offset));
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(styled(mem::take(&mut buffer), highlighted, highlight_style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}
	if !buffer.is_empty() {
		spans.push(styled(buffer, highlighted, highlight_style));
	}
	spans
}

fn styled(text: String, highlighted: bool, highlight_style: Style) -> Span<'static> {
	if highlighted {
		Span::styled(text, highlight_style)
	} else {
		Span::raw(text)
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;

	fn spans_of(text: &str, ranges: &[Range<usize>]) -> Vec<(String, bool)> {
		let style = Style::default().fg(Color::Yellow);
		highlight_spans(text, ranges, style)
			.into_iter()
			.map(|span| (span.content.into_owned(), span.style == style))
			.collect()
	}

	#[test]
	fn highlight_splits_around_matches() {
		assert_eq!(
			spans_of("vkcube", &[2..6]),
			vec![("vk".to_string(), false), ("cube".to_string(), true)]
		);
	}

	#[test]
	fn highlight_handles_several_ranges() {
		assert_eq!(
			spans_of("254441", &[0..1, 3..5]),
			vec![
				("2".to_string(), true),
				("54".to_string(), false),
				("44".to_string(), true),
				("1".to_string(), false),
			]
		);
	}

	#[test]
	fn rows_skip_indices_outside_the_entry_set() {
		let entries = vec![Entry::new("1", "alpha")];
		let matched = vec![
			MatchedRow {
				index: 0,
				id_ranges: Vec::new(),
				name_ranges: vec![0..2],
			},
			MatchedRow {
				index: 7,
				id_ranges: Vec::new(),
				name_ranges: Vec::new(),
			},
		];
		assert_eq!(build_entry_rows(&matched, &entries, Style::default()).len(), 1);
	}
}
