//! State management for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::tables::TABLE_HEADER_ROWS;

/// Widget state of the results table plus the geometry of its last render.
#[derive(Default)]
pub(crate) struct ResultsState {
	pub table_state: TableState,
	pub scrollbar_state: ScrollbarState,
	/// Screen area of the scrollbar if rendered.
	pub scrollbar_area: Option<Rect>,
	/// Last known results area on screen, borders included.
	pub area: Option<Rect>,
	rows: usize,
}

impl ResultsState {
	/// Point the table at the picker's selection.
	pub fn sync_selection(&mut self, selected: Option<usize>, rows: usize) {
		self.rows = rows;
		self.table_state.select(selected);
		if rows == 0 {
			*self.table_state.offset_mut() = 0;
		}
	}

	/// Number of rows that fit below the header.
	pub fn viewport_rows(&self) -> usize {
		self.area.map_or(0, |area| {
			usize::from(area.height.saturating_sub(2 + TABLE_HEADER_ROWS))
		})
	}

	/// Whether the point lies inside the results table.
	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area.is_some_and(|area| point_in_rect(column, row, area))
	}

	/// Visible row index under the given mouse position.
	pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.area?;
		if !point_in_rect(column, row, area) {
			return None;
		}

		// Rows start below the top border, the header and its separator.
		let body_start_y = area.y.saturating_add(1 + TABLE_HEADER_ROWS);
		let body_end_y = area.y.saturating_add(area.height.saturating_sub(1));
		if row < body_start_y || row >= body_end_y {
			return None;
		}

		let index = self
			.table_state
			.offset()
			.saturating_add(usize::from(row - body_start_y));
		(index < self.rows).then_some(index)
	}

	/// Keep the offset in range and the scrollbar in step with it.
	pub fn update_scrollbar(&mut self) {
		let viewport = self.viewport_rows();
		if viewport == 0 || self.rows <= viewport {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		let max_offset = self.rows - viewport;
		let mut offset = self.table_state.offset().min(max_offset);
		if let Some(selected) = self.table_state.selected() {
			if selected < offset {
				offset = selected;
			} else if selected >= offset + viewport {
				offset = selected + 1 - viewport;
			}
		}
		*self.table_state.offset_mut() = offset;

		self.scrollbar_state = ScrollbarState::new(self.rows)
			.viewport_content_length(viewport)
			.position(offset * (self.rows - 1) / max_offset);
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub(crate) fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
