pub(crate) mod layout;

use layout::{column_widths, split_screen};
use ratatui::Frame;

use super::App;
use crate::components::rows::build_entry_rows;
use crate::components::{
	InputContext, MatchStatus, TableSpec, TableTarget, render_footer, render_input, render_table,
};

impl App<'_> {
	/// Draw the whole picker into `frame`.
	pub fn draw(&mut self, frame: &mut Frame) {
		let regions = split_screen(frame.area());
		let theme = self.style.theme;

		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				area: regions.input,
				theme: &theme,
			},
			MatchStatus {
				visible: self.matched.len(),
				total: self.entries.len(),
				problem: self.problem.as_deref(),
			},
		);

		self.results.area = Some(regions.results);
		self.results.update_scrollbar();
		let spec = TableSpec {
			title: &self.labels.title,
			headers: [&self.labels.id_header, &self.labels.name_header],
			widths: column_widths(&self.entries, &self.labels.id_header),
			rows: build_entry_rows(&self.matched, &self.entries, theme.highlight),
			empty_message: &self.labels.empty_message,
		};
		let target = TableTarget {
			table_state: &mut self.results.table_state,
			scrollbar_state: &mut self.results.scrollbar_state,
			scrollbar_area: &mut self.results.scrollbar_area,
		};
		render_table(frame, regions.results, target, spec, &theme);

		let confirmable = self.confirmable_entry().map(|entry| entry.name().to_string());
		render_footer(
			frame,
			regions.footer,
			&self.labels.hint,
			confirmable.as_deref(),
			&theme,
		);
	}
}
