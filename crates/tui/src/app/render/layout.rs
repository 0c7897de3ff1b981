use ratatui::layout::{Constraint, Layout, Margin, Rect};
use tracepick_core::Entry;
use unicode_width::UnicodeWidthStr;

/// Screen regions: query line, results table, footer.
pub(crate) struct Regions {
	pub input: Rect,
	pub results: Rect,
	pub footer: Rect,
}

pub(crate) fn split_screen(area: Rect) -> Regions {
	let area = area.inner(Margin {
		vertical: 0,
		horizontal: 1,
	});
	let [input, results, footer] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(area);
	Regions {
		input,
		results,
		footer,
	}
}

/// Size the ID column to its widest value and give the rest to names.
pub(crate) fn column_widths(entries: &[Entry], id_header: &str) -> [Constraint; 2] {
	let id_width = entries
		.iter()
		.map(|entry| entry.id().width())
		.chain(std::iter::once(id_header.width()))
		.max()
		.unwrap_or_default();
	[
		Constraint::Length(u16::try_from(id_width).unwrap_or(u16::MAX)),
		Constraint::Fill(1),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn id_column_fits_header_and_values() {
		let entries = vec![Entry::new("1", "a"), Entry::new("fuchsia-5254-0063-5e7a", "b")];
		assert_eq!(column_widths(&entries, "Global ID")[0], Constraint::Length(22));
		assert_eq!(column_widths(&entries[..1], "Global ID")[0], Constraint::Length(9));
	}

	#[test]
	fn screen_keeps_one_line_for_input_and_footer() {
		let regions = split_screen(Rect::new(0, 0, 80, 24));
		assert_eq!(regions.input, Rect::new(1, 0, 78, 1));
		assert_eq!(regions.results, Rect::new(1, 1, 78, 22));
		assert_eq!(regions.footer, Rect::new(1, 23, 78, 1));
	}
}
